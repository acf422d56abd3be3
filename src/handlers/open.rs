use crate::controllers::ViewState;
use crate::navigator::{Navigator, View};
use crate::views::Renderer;

/// Navigate through `paths` in order and print the last view once settled
///
/// Every navigation supersedes the one before it, so only the last path
/// issues a request that is waited for.
pub async fn handle_open(
    mut navigator: Navigator,
    paths: Vec<String>,
    json: bool,
) -> crate::Result<()> {
    let renderer = Renderer::new()?;

    let mut last = None;
    for path in &paths {
        last = Some(navigator.navigate(path)?);
    }
    let Some(mut view) = last else {
        return Ok(());
    };

    let state = view.settle().await?;
    println!("{}", render_view(&renderer, &view, &state, json)?);
    Ok(())
}

/// Render a settled view as text or JSON
pub fn render_view(
    renderer: &Renderer,
    view: &View,
    state: &ViewState,
    json: bool,
) -> crate::Result<String> {
    if json {
        renderer.render_json(view, state)
    } else {
        renderer.render(view, state)
    }
}
