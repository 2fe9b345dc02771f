use indexmap::IndexMap;
use strata_common::{Result, StrataError};

/// Named children of a compound tag, kept in insertion order.
pub type Compound = IndexMap<String, Tag>;

/// Kind byte written in front of named tags and as a list's element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    End,
    Int,
    String,
    List,
    Compound,
}

impl TagKind {
    pub fn id(self) -> u8 {
        match self {
            TagKind::End => 0,
            TagKind::Int => 3,
            TagKind::String => 8,
            TagKind::List => 9,
            TagKind::Compound => 10,
        }
    }
}

impl TryFrom<u8> for TagKind {
    type Error = StrataError;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            0 => Ok(TagKind::End),
            3 => Ok(TagKind::Int),
            8 => Ok(TagKind::String),
            9 => Ok(TagKind::List),
            10 => Ok(TagKind::Compound),
            _ => Err(StrataError::UnsupportedValueKind(id)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Int(i32),
    String(String),
    List(TagList),
    Compound(Compound),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Int(_) => TagKind::Int,
            Tag::String(_) => TagKind::String,
            Tag::List(_) => TagKind::List,
            Tag::Compound(_) => TagKind::Compound,
        }
    }

    pub fn get_type_id(&self) -> u8 {
        self.kind().id()
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&TagList> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Tag::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Self {
        Tag::Int(value)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_owned())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::String(value)
    }
}

impl From<TagList> for Tag {
    fn from(value: TagList) -> Self {
        Tag::List(value)
    }
}

impl From<Compound> for Tag {
    fn from(value: Compound) -> Self {
        Tag::Compound(value)
    }
}

/// A list tag. The element kind is fixed when the list is created and every
/// element matches it; an empty list may declare any kind, including `End`.
#[derive(Debug, Clone, PartialEq)]
pub struct TagList {
    kind: TagKind,
    items: Vec<Tag>,
}

impl TagList {
    pub fn new(kind: TagKind) -> Self {
        TagList {
            kind,
            items: Vec::new(),
        }
    }

    pub fn from_tags(kind: TagKind, items: Vec<Tag>) -> Result<Self> {
        if let Some(bad) = items.iter().find(|tag| tag.kind() != kind) {
            return Err(StrataError::HeterogeneousList {
                expected: kind.id(),
                found: bad.get_type_id(),
            });
        }
        Ok(TagList { kind, items })
    }

    /// Same as `from_tags`, with the element kind given as a raw kind byte.
    pub fn with_kind_id(kind_id: u8, items: Vec<Tag>) -> Result<Self> {
        Self::from_tags(TagKind::try_from(kind_id)?, items)
    }

    pub fn of_ints<I: IntoIterator<Item = i32>>(values: I) -> Self {
        TagList {
            kind: TagKind::Int,
            items: values.into_iter().map(Tag::Int).collect(),
        }
    }

    pub fn of_compounds<I: IntoIterator<Item = Compound>>(values: I) -> Self {
        TagList {
            kind: TagKind::Compound,
            items: values.into_iter().map(Tag::Compound).collect(),
        }
    }

    pub fn push(&mut self, tag: Tag) -> Result<()> {
        if tag.kind() != self.kind {
            return Err(StrataError::HeterogeneousList {
                expected: self.kind.id(),
                found: tag.get_type_id(),
            });
        }
        self.items.push(tag);
        Ok(())
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
