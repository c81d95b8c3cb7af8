pub mod xml;

use crate::document::Element;
use crate::error::Result;

/// Every document parser implements this trait.
pub trait Parser {
    /// Parse the input text into a generic element tree.
    fn parse(&self, input: &str) -> Result<Element>;
}
