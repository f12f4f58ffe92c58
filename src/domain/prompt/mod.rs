pub mod compiler;
pub mod injections;
pub mod prompt_ref;
pub mod template;

pub use compiler::{render_adhoc, render_targets};
pub use injections::build_injections;
pub use prompt_ref::{PromptRef, with_uniqueness_token};
pub use template::{PromptContext, PromptTemplate, TemplateRenderer};
