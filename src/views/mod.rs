//! Template rendering
//!
//! Templates are embedded at build time and rendered with tera. Every render
//! gets the route path and parameters, the view state, display rows, the
//! bound collection under the controller's field name and a `get_class`
//! function that marks the active section.

pub mod rows;

use std::collections::HashMap;

use serde_json::{Map, Value};
use tera::{Context, Tera};

use crate::controllers::ViewState;
use crate::error::Result;
use crate::navigator::View;
use crate::routing::RouteContext;

pub use rows::{rows, Row};

const NAV: &str = include_str!("../../templates/nav.txt");
const INSTANCE_LIST: &str = include_str!("../../templates/instance-list.txt");
const CLUSTER_LIST: &str = include_str!("../../templates/cluster-list.txt");
const EMPTY: &str = include_str!("../../templates/empty.txt");

/// Template used for views no route matched
pub const EMPTY_TEMPLATE: &str = "empty";

#[derive(Debug, Clone)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("nav", NAV),
            ("instance-list", INSTANCE_LIST),
            ("cluster-list", CLUSTER_LIST),
            (EMPTY_TEMPLATE, EMPTY),
        ])?;
        Ok(Self { tera })
    }

    /// Render a view in the given state with its route template
    pub fn render(&self, view: &View, state: &ViewState) -> Result<String> {
        let route = view.context();
        let mut context = Context::new();
        context.insert("path", route.path());
        context.insert("params", route.params());
        context.insert("state", state.label());

        let template = view.template().unwrap_or(EMPTY_TEMPLATE);
        let data = state.data();
        context.insert("rows", &data.map(rows).unwrap_or_default());
        if let (Some(field), Some(data)) = (view.field(), data) {
            context.insert(field, data);
        }

        let mut tera = self.tera.clone();
        tera.register_function("get_class", get_class(route.clone()));
        Ok(tera.render(template, &context)?)
    }

    /// Render the bound field of a view as JSON
    pub fn render_json(&self, view: &View, state: &ViewState) -> Result<String> {
        let route = view.context();
        let mut body = Map::new();
        body.insert("path".to_string(), Value::from(route.path()));
        body.insert("params".to_string(), serde_json::to_value(route.params())?);
        body.insert("state".to_string(), Value::from(state.label()));
        if let Some(field) = view.field() {
            let data = state.data().cloned().map(Value::Object).unwrap_or(Value::Null);
            body.insert(field.to_string(), data);
        }
        Ok(serde_json::to_string_pretty(&Value::Object(body))?)
    }
}

fn get_class(route: RouteContext) -> impl tera::Function {
    move |args: &HashMap<String, Value>| -> tera::Result<Value> {
        let name = args
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("get_class requires a `name` string argument"))?;
        Ok(Value::from(route.class_for(name).unwrap_or_default()))
    }
}
