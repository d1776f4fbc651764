//! Conditional CSS class list composition.

use std::borrow::Cow;
use std::fmt;

use tracing::trace;

use crate::attributes::{AttributeValue, Attributes};
use crate::condition::Condition;

/// Bag key read by [`ClassListBuilder::add_class_from_attributes`].
const CLASS_KEY: &str = "class";

/// A value that can be appended to a [`ClassListBuilder`] as a single class
/// token: a string, or a whole nested builder that is finalized on append.
///
/// The conversion only runs once the guarding condition has accepted the
/// append, so a nested builder behind a false condition is never finalized.
pub trait IntoClassToken {
    /// Convert into the token text.
    fn into_class_token(self) -> String;
}

impl IntoClassToken for String {
    fn into_class_token(self) -> String {
        self
    }
}

impl IntoClassToken for &str {
    fn into_class_token(self) -> String {
        self.to_string()
    }
}

impl IntoClassToken for Cow<'_, str> {
    fn into_class_token(self) -> String {
        self.into_owned()
    }
}

impl IntoClassToken for ClassListBuilder {
    fn into_class_token(self) -> String {
        self.build()
    }
}

impl IntoClassToken for AttributeValue {
    fn into_class_token(self) -> String {
        self.to_string()
    }
}

impl IntoClassToken for &AttributeValue {
    fn into_class_token(self) -> String {
        self.to_string()
    }
}

/// A fluent builder for conditional, space-separated CSS class lists.
///
/// Each call consumes the builder and returns it, so a class list is written
/// as one chain ending in [`build`](Self::build):
///
/// ```
/// use attr_strings::ClassListBuilder;
///
/// let selected = true;
/// let classes = ClassListBuilder::new("tab")
///     .add_class_when("tab-selected", selected)
///     .add_class_when("tab-muted", !selected)
///     .build();
/// assert_eq!(classes, "tab tab-selected");
/// ```
///
/// Tokens appear in exact call order. Rejected appends contribute nothing,
/// not even spacing. An empty-string token still gets its separating space;
/// interior whitespace runs are kept as-is and only the ends are trimmed,
/// for output compatibility with existing consumers.
#[derive(Clone, Debug, Default)]
pub struct ClassListBuilder {
    buffer: String,
    prefix: String,
}

impl ClassListBuilder {
    /// Create a builder seeded with an initial class string. No separator is
    /// prepended; use [`ClassListBuilder::default`] for an empty builder.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            buffer: initial.into(),
            prefix: String::new(),
        }
    }

    /// Append raw text with no separator. This is the lowest-level primitive;
    /// the text lands in the buffer exactly as given and will run together
    /// with whatever is appended next.
    pub fn add_value(mut self, value: impl AsRef<str>) -> Self {
        self.buffer.push_str(value.as_ref());
        self
    }

    /// Append a class token, space-separated from prior content and carrying
    /// the active prefix.
    pub fn add_class(self, value: impl IntoClassToken) -> Self {
        self.push(value, Condition::Always)
    }

    /// Append a class token only if `when` is true. A false condition is a
    /// complete no-op: the token is never converted and no spacing is added.
    pub fn add_class_when(self, value: impl IntoClassToken, when: bool) -> Self {
        self.push(value, Condition::When(when))
    }

    /// Append a class token gated by a predicate. The predicate runs exactly
    /// once, at this call; a panicking predicate propagates to the caller.
    pub fn add_class_with(self, value: impl IntoClassToken, when: impl FnOnce() -> bool) -> Self {
        self.push(value, Condition::Lazy(Box::new(when)))
    }

    /// Append a class token when one is present. Useful for values looked up
    /// from a bag that may not hold them:
    ///
    /// ```
    /// use attr_strings::{Attributes, ClassListBuilder};
    ///
    /// let attributes = Attributes::new();
    /// let classes = ClassListBuilder::new("item-one")
    ///     .add_class_opt(attributes.get("class"))
    ///     .build();
    /// assert_eq!(classes, "item-one");
    /// ```
    pub fn add_class_opt(self, value: Option<impl IntoClassToken>) -> Self {
        match value {
            Some(value) => self.add_class(value),
            None => self,
        }
    }

    /// Set the prefix prepended to every class appended from here on,
    /// including classes merged from attribute bags. Not retroactive; an
    /// empty string clears it.
    pub fn set_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Merge the `class` entry of a pass-through attribute bag, prefixed like
    /// any other class. A missing bag or a bag without a `class` key is a
    /// no-op, never an error.
    pub fn add_class_from_attributes(self, attributes: Option<&Attributes>) -> Self {
        match attributes.and_then(|attributes| attributes.get(CLASS_KEY)) {
            Some(value) => {
                trace!(class = %value, "merging class from pass-through attributes");
                self.add_class(value)
            }
            None => self,
        }
    }

    /// Finalize the class list: the accumulated buffer with leading and
    /// trailing whitespace trimmed. An untouched builder builds to `""`.
    pub fn build(self) -> String {
        self.buffer.trim().to_string()
    }

    /// Like [`build`](Self::build), but an empty result becomes `None`, for
    /// hosts that want to omit the attribute entirely rather than emit
    /// `class=""`.
    pub fn build_nonempty(self) -> Option<String> {
        let classes = self.build();
        if classes.is_empty() {
            None
        } else {
            Some(classes)
        }
    }

    fn push(mut self, value: impl IntoClassToken, when: Condition<'_>) -> Self {
        if when.holds() {
            self.buffer.push(' ');
            self.buffer.push_str(&self.prefix);
            self.buffer.push_str(&value.into_class_token());
        }
        self
    }
}

impl fmt::Display for ClassListBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.buffer.trim())
    }
}
