use crate::domain::{AppError, PromptContext, TemplateRenderer};

/// Template renderer for `{NAME}` placeholders.
///
/// `{{` and `}}` render as literal braces. Unknown names and unbalanced braces
/// are errors rather than being passed through.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTemplateRenderer;

impl PlaceholderTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        let mut output = String::with_capacity(template.len());
        let mut chars = template.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' if chars.peek().map(|&(_, c)| c) == Some('{') => {
                    chars.next();
                    output.push('{');
                }
                '}' if chars.peek().map(|&(_, c)| c) == Some('}') => {
                    chars.next();
                    output.push('}');
                }
                '{' => {
                    let rest = &template[offset + 1..];
                    let end = rest.find('}').ok_or_else(|| {
                        render_error(template_name, format!("unclosed '{{' at byte {}", offset))
                    })?;
                    let name = &rest[..end];
                    if name.is_empty() || name.contains('{') {
                        return Err(render_error(
                            template_name,
                            format!("invalid placeholder at byte {}", offset),
                        ));
                    }
                    let value = context.get(name).ok_or_else(|| {
                        render_error(template_name, format!("undefined placeholder '{}'", name))
                    })?;
                    output.push_str(value);
                    // Skip the name and its closing brace.
                    for _ in 0..=name.chars().count() {
                        chars.next();
                    }
                }
                '}' => {
                    return Err(render_error(
                        template_name,
                        format!("single '}}' encountered at byte {}", offset),
                    ));
                }
                other => output.push(other),
            }
        }

        Ok(output)
    }
}

fn render_error(template_name: &str, reason: String) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason }
}
