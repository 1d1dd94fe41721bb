//! Grammar productions for .NET regular expressions.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Apart from sequences, every production returns a fixed-arity [`Node`](super::element::Node):
//! malformed input changes which tokens are missing, not how many children a node has.

mod classes;
mod escapes;
mod groupings;
mod quantifiers;
mod sequences;
