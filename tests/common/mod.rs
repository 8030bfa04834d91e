//! Shared utilities for integration tests.
//!
//! Provides:
//! - An in-memory document built from [`Node`] trees
//! - [`FakeSession`], a [`Session`] that answers native finds and the
//!   crate's introspection scripts against that document, logging every call
//! - The application page used across test files
//! - Logging initialization

#![allow(dead_code)]

// ============================================================================
// Imports
// ============================================================================

use std::ops::Range;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use ng_finder::locator::scripts;
use ng_finder::{Action, ElementId, Error, Result, Session};

// ============================================================================
// Constants
// ============================================================================

/// Directive prefixes recognized by the framework.
const PREFIXES: [&str; 5] = ["ng-", "ng_", "data-ng-", "x-ng-", "ng:"];

/// Binding directives.
const BIND_DIRECTIVES: [&str; 3] = ["bind", "bind-template", "bind-html"];

/// Script body used by custom strategy tests.
pub const BUTTON_TEXT: &str = r#"
var text = arguments[0];
var using = arguments[1] || document;
var exclude = arguments[2] || [];
return [].filter.call(using.querySelectorAll('button'), function(button) {
  return button.textContent === text && exclude.indexOf(button) === -1;
});
"#;

/// Days rendered by the application page.
pub const DAYS: [(&str, &str); 5] = [
    ("M", "Monday"),
    ("T", "Tuesday"),
    ("W", "Wednesday"),
    ("Th", "Thursday"),
    ("F", "Friday"),
];

// ============================================================================
// Logging
// ============================================================================

/// Initialize tracing for a test; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ng_finder=debug")),
        )
        .with_target(false)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Node
// ============================================================================

/// Element description used to build a document.
#[derive(Debug, Clone, Default)]
pub struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    binding: Option<String>,
    scope: Option<Value>,
    selected: bool,
    children: Vec<Node>,
}

/// Starts an element description.
pub fn el(tag: &str) -> Node {
    Node {
        tag: tag.to_string(),
        ..Default::default()
    }
}

impl Node {
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        match self.attrs.iter_mut().find(|(name, _)| name == "class") {
            Some((_, value)) => {
                value.push(' ');
                value.push_str(class);
            }
            None => self.attrs.push(("class".to_string(), class.to_string())),
        }
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Marks the element as rendering `expression` (`$binding` data).
    pub fn bind(mut self, expression: &str) -> Self {
        self.binding = Some(expression.to_string());
        self.class("ng-binding")
    }

    /// Attaches a framework scope to the element.
    pub fn scope(mut self, scope: Value) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

// ============================================================================
// Dom
// ============================================================================

#[derive(Debug, Clone)]
struct Slot {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    binding: Option<String>,
    scope: Option<Value>,
    selected: bool,
    parent: Option<usize>,
    children: Vec<usize>,
    /// One past the last descendant.
    end: usize,
}

/// Element arena in document order; slot 0 is the document itself.
#[derive(Debug, Clone)]
struct Dom {
    slots: Vec<Slot>,
}

impl Dom {
    fn build(body: Node) -> Self {
        let mut slots = vec![Slot {
            tag: "#document".to_string(),
            attrs: Vec::new(),
            text: String::new(),
            binding: None,
            scope: None,
            selected: false,
            parent: None,
            children: Vec::new(),
            end: 1,
        }];
        Self::push(&mut slots, body, 0);
        slots[0].end = slots.len();
        Self { slots }
    }

    fn push(slots: &mut Vec<Slot>, node: Node, parent: usize) {
        let index = slots.len();
        slots.push(Slot {
            tag: node.tag,
            attrs: node.attrs,
            text: node.text,
            binding: node.binding,
            scope: node.scope,
            selected: node.selected,
            parent: Some(parent),
            children: Vec::new(),
            end: index + 1,
        });
        slots[parent].children.push(index);
        for child in node.children {
            Self::push(slots, child, index);
        }
        slots[index].end = slots.len();
    }

    fn descendants(&self, root: usize) -> Range<usize> {
        root + 1..self.slots[root].end
    }

    fn attr(&self, index: usize, name: &str) -> Option<&str> {
        self.slots[index]
            .attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_attr(&mut self, index: usize, name: &str, value: String) {
        let attrs = &mut self.slots[index].attrs;
        match attrs.iter_mut().find(|(attr, _)| attr == name) {
            Some((_, current)) => *current = value,
            None => attrs.push((name.to_string(), value)),
        }
    }

    fn has_class(&self, index: usize, class: &str) -> bool {
        self.attr(index, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    fn text_content(&self, index: usize) -> String {
        let slot = &self.slots[index];
        let mut parts = Vec::new();
        if !slot.text.is_empty() {
            parts.push(slot.text.clone());
        }
        for &child in &slot.children {
            let text = self.text_content(child);
            if !text.is_empty() {
                parts.push(text);
            }
        }
        parts.join(" ")
    }

    /// Binding expressions of an element: `$binding` data, then bind
    /// attributes.
    fn binding_names(&self, index: usize) -> Vec<String> {
        if let Some(binding) = &self.slots[index].binding {
            return vec![binding.clone()];
        }
        let mut names = Vec::new();
        for prefix in PREFIXES {
            for directive in BIND_DIRECTIVES {
                if let Some(value) = self.attr(index, &format!("{prefix}{directive}")) {
                    names.push(value.to_string());
                }
            }
        }
        names
    }

    fn has_bind_attr(&self, index: usize) -> bool {
        PREFIXES.iter().any(|prefix| {
            BIND_DIRECTIVES
                .iter()
                .any(|directive| self.attr(index, &format!("{prefix}{directive}")).is_some())
        })
    }

    fn model_of(&self, index: usize) -> Option<&str> {
        PREFIXES
            .iter()
            .find_map(|prefix| self.attr(index, &format!("{prefix}model")))
    }

    // ---- CSS subset: tag, #id, .class, [attr], [attr="v"], descendant, comma

    fn matches_selector(&self, index: usize, selector: &str) -> bool {
        selector.split(',').any(|alternative| {
            let parts: Vec<Compound> = alternative.split_whitespace().map(Compound::parse).collect();
            let Some((last, ancestors)) = parts.split_last() else {
                return false;
            };
            if !last.matches(self, index) {
                return false;
            }
            let mut current = self.slots[index].parent;
            for compound in ancestors.iter().rev() {
                loop {
                    match current {
                        None | Some(0) => return false,
                        Some(ancestor) => {
                            current = self.slots[ancestor].parent;
                            if compound.matches(self, ancestor) {
                                break;
                            }
                        }
                    }
                }
            }
            true
        })
    }
}

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Compound {
    fn parse(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let mut compound = Compound::default();
        let mut i = 0;

        let ident = |i: &mut usize| -> String {
            let start = *i;
            while *i < chars.len()
                && (chars[*i].is_alphanumeric() || chars[*i] == '-' || chars[*i] == '_')
            {
                *i += 1;
            }
            chars[start..*i].iter().collect()
        };

        let tag = ident(&mut i);
        if !tag.is_empty() && tag != "*" {
            compound.tag = Some(tag);
        }

        while i < chars.len() {
            match chars[i] {
                '#' => {
                    i += 1;
                    compound.id = Some(ident(&mut i));
                }
                '.' => {
                    i += 1;
                    compound.classes.push(ident(&mut i));
                }
                '[' => {
                    let close = chars[i..]
                        .iter()
                        .position(|&c| c == ']')
                        .map_or(chars.len(), |p| i + p);
                    let body: String = chars[i + 1..close].iter().collect();
                    let attr = match body.split_once('=') {
                        Some((name, value)) => (
                            name.replace('\\', ""),
                            Some(value.trim_matches('"').trim_matches('\'').to_string()),
                        ),
                        None => (body.replace('\\', ""), None),
                    };
                    compound.attrs.push(attr);
                    i = close + 1;
                }
                _ => i += 1,
            }
        }
        compound
    }

    fn matches(&self, dom: &Dom, index: usize) -> bool {
        let slot = &dom.slots[index];
        self.tag
            .as_ref()
            .is_none_or(|tag| slot.tag.eq_ignore_ascii_case(tag))
            && self
                .id
                .as_ref()
                .is_none_or(|id| dom.attr(index, "id") == Some(id.as_str()))
            && self.classes.iter().all(|class| dom.has_class(index, class))
            && self.attrs.iter().all(|(name, value)| match value {
                Some(value) => dom.attr(index, name) == Some(value.as_str()),
                None => dom.attr(index, name).is_some(),
            })
    }
}

// ============================================================================
// FakeSession
// ============================================================================

struct State {
    dom: Dom,
    generation: u64,
    angular: bool,
    calls: Vec<String>,
}

/// In-memory [`Session`] over a [`Node`] tree.
///
/// Clones share the same document and call log.
#[derive(Clone)]
pub struct FakeSession {
    state: Arc<Mutex<State>>,
}

impl FakeSession {
    /// Creates a session with the framework loaded.
    pub fn new(body: Node) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                dom: Dom::build(body),
                generation: 1,
                angular: true,
                calls: Vec::new(),
            })),
        }
    }

    /// Removes (or restores) the framework global.
    pub fn set_angular(&self, loaded: bool) {
        self.state.lock().angular = loaded;
    }

    /// Replaces the document; every previous handle goes stale.
    pub fn navigate(&self, body: Node) {
        let mut state = self.state.lock();
        state.dom = Dom::build(body);
        state.generation += 1;
    }

    /// Returns the calls issued so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }
}

impl State {
    fn handle(&self, index: usize) -> ElementId {
        ElementId::new(format!("{}:{}", self.generation, index))
    }

    fn refs(&self, indices: impl IntoIterator<Item = usize>) -> Value {
        Value::Array(
            indices
                .into_iter()
                .map(|index| self.handle(index).to_reference())
                .collect(),
        )
    }

    fn node(&self, id: &ElementId) -> Result<usize> {
        let stale = || Error::stale_element(format!("{id} is no longer attached to the document"));
        let (generation, index) = id.as_str().split_once(':').ok_or_else(stale)?;
        let generation: u64 = generation.parse().map_err(|_| stale())?;
        let index: usize = index.parse().map_err(|_| stale())?;
        if generation != self.generation || index == 0 || index >= self.dom.slots.len() {
            return Err(stale());
        }
        Ok(index)
    }

    fn node_arg(&self, value: &Value) -> Result<Option<usize>> {
        if value.is_null() {
            return Ok(None);
        }
        let id = ElementId::from_reference(value)
            .ok_or_else(|| Error::script_error("argument is not an element"))?;
        self.node(&id).map(Some)
    }

    fn root_arg(&self, value: &Value) -> Result<usize> {
        Ok(self.node_arg(value)?.unwrap_or(0))
    }

    fn exclusions(&self, value: &Value) -> Result<Vec<usize>> {
        value
            .as_array()
            .map(|items| items.iter().map(|item| self.node_arg(item)))
            .into_iter()
            .flatten()
            .filter_map(|item| item.transpose())
            .collect()
    }

    fn require_angular(&self) -> Result<()> {
        if self.angular {
            Ok(())
        } else {
            Err(Error::script_error("angular could not be found on the window"))
        }
    }

    fn find_bindings(&self, args: &[Value]) -> Result<Value> {
        self.require_angular()?;
        let binding = args[0].as_str().unwrap_or_default();
        let exact = args[1].as_bool().unwrap_or(false);
        let root = self.root_arg(&args[2])?;
        let exclude = self.exclusions(&args[3])?;

        let matches = self.dom.descendants(root).filter(|&index| {
            !exclude.contains(&index)
                && (self.dom.has_class(index, "ng-binding") || self.dom.has_bind_attr(index))
                && self.dom.binding_names(index).iter().any(|name| {
                    if exact {
                        name == binding
                    } else {
                        name.contains(binding)
                    }
                })
        });
        Ok(self.refs(matches.collect::<Vec<_>>()))
    }

    fn find_by_model(&self, args: &[Value]) -> Result<Value> {
        self.require_angular()?;
        let model = args[0].as_str().unwrap_or_default();
        let tag = args[1].as_str().unwrap_or_default();
        let suffix = args[2].as_str().unwrap_or_default();
        let root = self.root_arg(&args[3])?;
        let exclude = self.exclusions(&args[4])?;

        let controls: Vec<usize> = self
            .dom
            .descendants(root)
            .filter(|&index| {
                self.dom.model_of(index) == Some(model)
                    && (tag.is_empty() || self.dom.slots[index].tag == tag)
            })
            .collect();

        let mut matches: Vec<usize> = if suffix.contains("option:checked") {
            controls
                .iter()
                .flat_map(|&control| self.dom.descendants(control))
                .filter(|&index| self.dom.slots[index].tag == "option" && self.dom.slots[index].selected)
                .collect()
        } else {
            controls
        };
        matches.sort_unstable();
        matches.dedup();
        matches.retain(|index| !exclude.contains(index));
        Ok(self.refs(matches))
    }

    fn find_repeater(&self, args: &[Value]) -> Result<Value> {
        let repeater = args[0].as_str().unwrap_or_default();
        let row = args[1].as_u64().map(|row| row as usize);
        let column = args[2].as_str();
        let root = self.root_arg(&args[3])?;
        let exclude = self.exclusions(&args[4])?;

        let mut rows: Vec<Vec<usize>> = Vec::new();
        for prefix in PREFIXES {
            let attr = format!("{prefix}repeat");
            for index in self.dom.descendants(root) {
                if self.dom.attr(index, &attr).is_some_and(|v| v.contains(repeater)) {
                    rows.push(vec![index]);
                }
            }
            let start = format!("{attr}-start");
            let end = format!("{attr}-end");
            for index in self.dom.descendants(root) {
                if !self.dom.attr(index, &start).is_some_and(|v| v.contains(repeater)) {
                    continue;
                }
                let Some(parent) = self.dom.slots[index].parent else {
                    continue;
                };
                let siblings = &self.dom.slots[parent].children;
                let position = siblings.iter().position(|&s| s == index).unwrap_or(0);
                let mut group = Vec::new();
                for &sibling in &siblings[position..] {
                    group.push(sibling);
                    if self.dom.attr(sibling, &end).is_some() {
                        break;
                    }
                }
                rows.push(group);
            }
        }
        rows.sort_by_key(|row| row[0]);

        let mut skipped = 0;
        if let Some(first) = rows.first() {
            let container = self.dom.slots[first[0]].parent;
            let before = rows.len();
            rows.retain(|row| self.dom.slots[row[0]].parent == container);
            skipped = before - rows.len();
        }

        if let Some(row) = row {
            rows = rows.into_iter().skip(row).take(1).collect();
        }

        let elements: Vec<usize> = match column {
            None => rows.into_iter().flatten().collect(),
            Some(column) => {
                self.require_angular()?;
                let wanted = strip_braces(column);
                let mut cells = Vec::new();
                for index in rows.into_iter().flatten() {
                    let candidates = std::iter::once(index).chain(
                        self.dom.descendants(index).filter(|&d| {
                            self.dom.has_class(d, "ng-binding") || self.dom.has_bind_attr(d)
                        }),
                    );
                    for candidate in candidates {
                        let bound = self
                            .dom
                            .binding_names(candidate)
                            .iter()
                            .any(|name| strip_braces(name).contains(&wanted));
                        if bound {
                            cells.push(candidate);
                        }
                    }
                }
                cells
            }
        };

        let elements: Vec<usize> = elements
            .into_iter()
            .filter(|index| !exclude.contains(index))
            .collect();
        Ok(json!({ "elements": self.refs(elements), "skipped": skipped }))
    }

    fn evaluate(&self, args: &[Value]) -> Result<Value> {
        self.require_angular()?;
        let index = self
            .node_arg(&args[0])?
            .ok_or_else(|| Error::script_error("argument is not an element"))?;
        let expression = args[1].as_str().unwrap_or_default();
        let segments: Vec<&str> = expression.split('.').collect();
        let Some((head, rest)) = segments.split_first() else {
            return Ok(Value::Null);
        };

        let mut current = Some(index);
        while let Some(node) = current {
            if let Some(mut value) = self.dom.slots[node].scope.as_ref().and_then(|s| s.get(*head)) {
                for segment in rest {
                    match value.get(*segment) {
                        Some(next) => value = next,
                        None => return Ok(Value::Null),
                    }
                }
                return Ok(value.clone());
            }
            current = self.dom.slots[node].parent;
        }
        Ok(Value::Null)
    }

    fn button_text(&self, args: &[Value]) -> Result<Value> {
        let text = args[0].as_str().unwrap_or_default();
        let root = self.root_arg(&args[1])?;
        let exclude = self.exclusions(&args[2])?;
        let matches: Vec<usize> = self
            .dom
            .descendants(root)
            .filter(|&index| {
                self.dom.slots[index].tag == "button"
                    && self.dom.text_content(index) == text
                    && !exclude.contains(&index)
            })
            .collect();
        Ok(self.refs(matches))
    }
}

fn strip_braces(text: &str) -> String {
    let text = text.trim();
    let text = text.strip_prefix("{{").unwrap_or(text);
    let text = text.strip_suffix("}}").unwrap_or(text);
    text.trim().to_string()
}

fn script_name(source: &str) -> &'static str {
    if source == scripts::FIND_BINDINGS {
        "bindings"
    } else if source == scripts::FIND_BY_MODEL {
        "model"
    } else if source == scripts::FIND_REPEATER {
        "repeater"
    } else if source == scripts::EVALUATE {
        "evaluate"
    } else if source == BUTTON_TEXT {
        "buttonText"
    } else {
        "unknown"
    }
}

#[async_trait]
impl Session for FakeSession {
    async fn find_many(
        &self,
        using: &str,
        value: &str,
        context: Option<&ElementId>,
    ) -> Result<Vec<ElementId>> {
        let mut state = self.state.lock();
        state.calls.push(format!("find {using} {value}"));

        let root = match context {
            Some(id) => state.node(id)?,
            None => 0,
        };
        let dom = &state.dom;
        let matches: Vec<usize> = match using {
            "css selector" => dom
                .descendants(root)
                .filter(|&index| dom.matches_selector(index, value))
                .collect(),
            "tag name" => dom
                .descendants(root)
                .filter(|&index| dom.slots[index].tag.eq_ignore_ascii_case(value))
                .collect(),
            "link text" => dom
                .descendants(root)
                .filter(|&index| dom.slots[index].tag == "a" && dom.text_content(index) == value)
                .collect(),
            "partial link text" => dom
                .descendants(root)
                .filter(|&index| {
                    dom.slots[index].tag == "a" && dom.text_content(index).contains(value)
                })
                .collect(),
            other => {
                return Err(Error::invalid_argument(format!(
                    "unsupported strategy: {other}"
                )));
            }
        };
        Ok(matches.into_iter().map(|index| state.handle(index)).collect())
    }

    async fn run_script(&self, source: &str, args: Vec<Value>) -> Result<Value> {
        let mut state = self.state.lock();
        let name = script_name(source);
        state.calls.push(format!("script {name}"));

        match name {
            "bindings" => state.find_bindings(&args),
            "model" => state.find_by_model(&args),
            "repeater" => state.find_repeater(&args),
            "evaluate" => state.evaluate(&args),
            "buttonText" => state.button_text(&args),
            _ => Err(Error::script_error("unsupported script")),
        }
    }

    async fn perform(&self, action: Action, element: &ElementId, args: Vec<Value>) -> Result<Value> {
        let mut state = self.state.lock();
        state.calls.push(format!("perform {} {element}", action.as_str()));
        let index = state.node(element)?;
        let arg = args.first().and_then(Value::as_str).unwrap_or_default().to_string();

        let value = match action {
            Action::Click => {
                if state.dom.attr(index, "data-navigate").is_some() {
                    state.generation += 1;
                }
                Value::Null
            }
            Action::Clear => {
                state.dom.set_attr(index, "value", String::new());
                Value::Null
            }
            Action::SendKeys => {
                let current = state.dom.attr(index, "value").unwrap_or_default().to_string();
                state.dom.set_attr(index, "value", current + &arg);
                Value::Null
            }
            Action::Submit => Value::Null,
            Action::GetText => json!(state.dom.text_content(index)),
            Action::GetAttribute => state.dom.attr(index, &arg).map_or(Value::Null, |v| json!(v)),
            Action::GetTagName => json!(state.dom.slots[index].tag),
            Action::IsDisplayed => json!(state.dom.attr(index, "hidden").is_none()),
            Action::IsEnabled => json!(state.dom.attr(index, "disabled").is_none()),
            Action::IsSelected => json!(state.dom.slots[index].selected),
        };
        Ok(value)
    }
}

// ============================================================================
// Application Page
// ============================================================================

/// The application page shared by the integration tests.
pub fn app() -> Node {
    let days = DAYS.iter().map(|(initial, name)| {
        el("li")
            .attr("ng-repeat", "day in days")
            .scope(json!({ "day": { "initial": initial, "name": name } }))
            .child(el("span").bind("{{day.initial}}").text(initial))
            .child(el("span").bind("{{day.name}}").text(name))
    });

    let bloops = DAYS[..3].iter().flat_map(|(initial, name)| {
        [
            el("div")
                .attr("ng-repeat-start", "bloop in days")
                .bind("{{bloop.initial}}")
                .text(initial),
            el("div")
                .attr("ng-repeat-end", "")
                .bind("{{bloop.name}}")
                .text(name),
        ]
    });

    el("body")
        .scope(json!({ "greeting": "Hiya", "username": "Anon" }))
        .children([
            el("div")
                .id("greeting")
                .child(el("span").bind("{{greeting}}").text("Hiya")),
            el("div").id("user").children([
                el("input")
                    .id("username")
                    .attr("ng-model", "username")
                    .attr("value", "Anon"),
                el("span")
                    .class("ng-binding")
                    .attr("ng-bind", "username")
                    .text("Anon"),
                el("span")
                    .attr("x-ng-bind-template", "{{username}} is here")
                    .text("Anon is here"),
                el("textarea").attr("data-ng-model", "about"),
            ]),
            el("div").id("fruits").children([
                el("select").attr("ng-model", "fruit").children([
                    el("option").attr("value", "apple").text("Apple").selected(),
                    el("option").attr("value", "banana").text("Banana"),
                ]),
                el("input")
                    .attr("type", "radio")
                    .attr("ng_model", "color")
                    .attr("value", "red"),
                el("input")
                    .attr("type", "radio")
                    .attr("ng:model", "color")
                    .attr("value", "blue")
                    .selected(),
            ]),
            el("ul").id("days").children(days),
            el("div").id("bloops").children(bloops),
            el("ul").class("menu").children([
                el("li").child(el("a").attr("href", "#/repeater").text("repeater")),
                el("li").child(el("a").attr("href", "#/bindings").text("bindings")),
                el("li").child(el("a").attr("href", "#/form").text("form")),
            ]),
            el("button").text("Save"),
            el("button").attr("disabled", "").text("Cancel"),
            el("a").id("reload").attr("data-navigate", "").text("Reload"),
            el("div").id("hidden").attr("hidden", "").text("secret"),
        ])
}

/// Page repeating the same expression inside two different containers.
pub fn divergent() -> Node {
    let items = |prefix: &'static str| {
        (0..2).map(move |i| {
            el("li")
                .attr("data-ng-repeat", "item in items")
                .child(el("span").bind("{{item.label}}").text(&format!("{prefix}{i}")))
        })
    };

    el("body").children([
        el("ul").id("first").children(items("a")),
        el("ul").id("second").children(items("b")),
    ])
}

/// Page exercising the remaining repeat spellings and multi-element rows.
///
/// `#grid` renders five rows of three siblings each: a start marker, an
/// unmarked middle element and an end marker.
pub fn prefixed() -> Node {
    let list = |attr: &'static str, expression: &'static str, prefix: &'static str| {
        (0..2).map(move |i| el("li").attr(attr, expression).text(&format!("{prefix}{i}")))
    };

    let grid = (0..5).flat_map(|row| {
        [
            el("div")
                .attr("data-ng-repeat-start", "row in grid")
                .text(&format!("r{row}-start")),
            el("div").child(
                el("span")
                    .bind("{{row.label}}")
                    .text(&format!("r{row}-mid")),
            ),
            el("div")
                .attr("data-ng-repeat-end", "")
                .child(
                    el("span")
                        .attr("ng-bind", "row.note")
                        .text(&format!("r{row}-end")),
                ),
        ]
    });

    el("body").children([
        el("ul").id("colon").children(list("ng:repeat", "c in colons", "c")),
        el("ul").id("underscore").children(list("ng_repeat", "u in unders", "u")),
        el("ul").id("extended").children(list("x-ng-repeat", "x in extras", "x")),
        el("div").id("grid").children(grid),
    ])
}
