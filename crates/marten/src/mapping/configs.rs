use super::GraphElement;
use serde_json::Value;

/// One layout option, either global (`target == None`) or attached to a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfigEntry {
    pub target: Option<GraphElement>,
    pub key: String,
    pub value: Value,
}

/// Additional layout configuration, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutConfigs {
    entries: Vec<LayoutConfigEntry>,
}

impl LayoutConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LayoutConfigEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn set_global(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.push(LayoutConfigEntry {
            target: None,
            key: key.into(),
            value: value.into(),
        })
    }

    pub fn set_for(
        &mut self,
        target: impl Into<GraphElement>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.push(LayoutConfigEntry {
            target: Some(target.into()),
            key: key.into(),
            value: value.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutConfigEntry> {
        self.entries.iter()
    }

    /// Entries that apply to `element`: global ones plus those targeting it, in insertion order.
    pub fn for_element(
        &self,
        element: impl Into<GraphElement>,
    ) -> impl Iterator<Item = &LayoutConfigEntry> {
        let element = element.into();
        self.entries
            .iter()
            .filter(move |e| e.target.is_none_or(|t| t == element))
    }

    /// Effective value of `key` for `element`. Element-specific entries win over global ones;
    /// within each group the last entry wins.
    pub fn get(&self, element: impl Into<GraphElement>, key: &str) -> Option<&Value> {
        let element = element.into();
        let latest = |target: Option<GraphElement>| {
            self.entries
                .iter()
                .rev()
                .find(|e| e.key == key && e.target == target)
                .map(|e| &e.value)
        };
        latest(Some(element)).or_else(|| latest(None))
    }
}
