//! Attribute model
//!
//! Attributes keep insertion order so host writes happen in the order the
//! caller declared them.

use indexmap::IndexMap;

use fos_dom::EventListener;

/// Inline style declarations (`property -> value`)
pub type StyleMap = IndexMap<String, String>;

/// Value of one attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Plain string value (`class`, `title`, `href`, ...)
    Text(String),
    /// `style` declarations
    Style(StyleMap),
    /// Event handler for an event-prefixed name (`@click`)
    Listener(EventListener),
}

impl AttrValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_style(&self) -> Option<&StyleMap> {
        match self {
            Self::Style(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_listener(&self) -> Option<&EventListener> {
        match self {
            Self::Listener(listener) => Some(listener),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<StyleMap> for AttrValue {
    fn from(value: StyleMap) -> Self {
        Self::Style(value)
    }
}

impl From<EventListener> for AttrValue {
    fn from(value: EventListener) -> Self {
        Self::Listener(value)
    }
}

/// Build a `style` value from property/value pairs
pub fn style<I, K, V>(properties: I) -> AttrValue
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    AttrValue::Style(
        properties.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

/// Ordered attribute map of one element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    /// Remove keeping the order of the remaining entries
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// How the attribute patcher treats a given name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttrSlot<'a> {
    Style,
    Class,
    /// Event binding; carries the event type without the prefix
    Event(&'a str),
    Plain,
}

impl<'a> AttrSlot<'a> {
    pub(crate) fn classify(name: &'a str, event_prefix: char) -> Self {
        match name {
            "style" => Self::Style,
            "class" => Self::Class,
            _ => match name.strip_prefix(event_prefix) {
                Some(event_type) => Self::Event(event_type),
                None => Self::Plain,
            },
        }
    }
}
