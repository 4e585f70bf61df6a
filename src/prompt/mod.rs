//! Interactive prompts for the setup front end
//!
//! - `interface`: The prompting trait the setup flow is written against
//! - `dialoguer`: Terminal implementation using the dialoguer library

pub mod dialoguer;
pub mod interface;

pub use dialoguer::DialoguerPrompter;
pub use interface::{collect_options, parse_kind_choice, SetupPrompter};
