//! HTML rendering for the single-page form.

/// What the output area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output<'a> {
    Empty,
    Text(&'a str),
    Error(&'a str),
}

/// Escape text for safe inclusion in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(title: &str, description: &str, prompt: &str, output: Output<'_>) -> String {
    let title = escape_html(title);
    let description = escape_html(description);
    let prompt = escape_html(prompt);
    let (output_class, output_text) = match output {
        Output::Empty => ("output", String::new()),
        Output::Text(text) => ("output", escape_html(text)),
        Output::Error(message) => ("output error", escape_html(message)),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
textarea, .output {{ width: 100%; box-sizing: border-box; min-height: 8rem; padding: .5rem; }}
.output {{ border: 1px solid #ccc; border-radius: 4px; white-space: pre-wrap; }}
.error {{ border-color: #c33; color: #c33; }}
button {{ margin: .5rem 0 1rem; padding: .4rem 1.2rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p>{description}</p>
<form method="post" action="/">
<label for="prompt">Input</label>
<textarea id="prompt" name="prompt">{prompt}</textarea>
<button type="submit">Submit</button>
</form>
<label>Output</label>
<div class="{output_class}" id="output">{output_text}</div>
</body>
</html>
"#
    )
}
