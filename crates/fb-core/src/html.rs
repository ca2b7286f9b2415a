//! HTML emitter: canvas → standalone document.
//!
//! Every field kind has exactly one markup template, used both for the live
//! canvas rendering and for the exported snapshot — the saved page looks
//! identical to the canvas by construction. Emission is pure: nothing in the
//! canvas is touched, and an empty canvas still yields a valid document.

use crate::model::{Canvas, Field, FieldType};
use std::fmt::Write;

/// The filename offered for download.
pub const EXPORT_FILENAME: &str = "saved_form.html";
/// The MIME type of the exported document.
pub const EXPORT_MIME: &str = "text/html";

/// A one-shot exported snapshot, handed to the environment's
/// "offer file for download" collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: &'static str,
    pub mime: &'static str,
    pub html: String,
}

/// Serialize the whole canvas into a download bundle.
#[must_use]
pub fn export(canvas: &Canvas) -> Export {
    Export {
        filename: EXPORT_FILENAME,
        mime: EXPORT_MIME,
        html: emit_document(canvas),
    }
}

/// Escape text for placement inside an HTML text node or attribute value.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one field with its per-type template.
///
/// The label is stored without a separator and rendered with a trailing `:`.
#[must_use]
pub fn field_markup(field: &Field) -> String {
    let mut out = String::with_capacity(128);
    out.push_str("<div class=\"field\">");

    if let Some(label) = &field.label {
        let _ = write!(out, "<label>{}:</label> ", escape(label));
    }

    match field.kind {
        FieldType::Header => out.push_str("<h2>Header Text</h2>"),
        FieldType::Text | FieldType::Email | FieldType::Password | FieldType::Number => {
            let _ = write!(out, "<input type=\"{}\"", field.kind.tag());
            if let Some(hint) = &field.placeholder {
                let _ = write!(out, " placeholder=\"{}\"", escape(hint));
            }
            out.push('>');
        }
        FieldType::Date | FieldType::Time => {
            let _ = write!(out, "<input type=\"{}\">", field.kind.tag());
        }
        FieldType::Checkbox => out.push_str("<label><input type=\"checkbox\"> Checkbox</label>"),
        FieldType::Radio => {
            out.push_str("<label><input type=\"radio\" name=\"radio-group\"> Radio</label>");
        }
        FieldType::Select => {
            out.push_str("<select>");
            for option in &field.options {
                let _ = write!(out, "<option>{}</option>", escape(option));
            }
            out.push_str("</select>");
        }
        FieldType::Textarea => {
            out.push_str("<textarea");
            if let Some(hint) = &field.placeholder {
                let _ = write!(out, " placeholder=\"{}\"", escape(hint));
            }
            out.push_str("></textarea>");
        }
        FieldType::Submit => out.push_str("<button type=\"submit\">Submit</button>"),
    }

    out.push_str("</div>");
    out
}

/// The fixed stylesheet embedded in every export.
const STYLESHEET: &str = r#"        .form-container {
            background: white;
            padding: 20px;
            border-radius: 10px;
            box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
            width: 90%;
            max-width: 400px;
        }
        form {
            display: flex;
            flex-direction: column;
            text-align: center;
        }
        .field {
            display: flex;
            align-items: center;
            gap: 5px;
            margin-bottom: 10px;
            white-space: nowrap;
        }
        .field label {
            margin: 0;
            padding: 0;
            font-weight: bold;
        }
        .field input[type="checkbox"],
        .field input[type="radio"] {
            width: 16px;
            height: 16px;
            margin: 0;
        }
        input, select, textarea, button {
            padding: 8px;
            border: 1px solid #ccc;
            border-radius: 5px;
            width: 100%;
        }
        button {
            background-color: #007bff;
            color: white;
            border: none;
            cursor: pointer;
            font-size: 16px;
        }
        button:hover {
            background-color: #0056b3;
        }
"#;

/// Emit the complete standalone document: fixed stylesheet, the canvas
/// background color on `body`, and every field in sequence order.
#[must_use]
pub fn emit_document(canvas: &Canvas) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str("    <title>Saved Form</title>\n");
    out.push_str("    <style>\n");
    let _ = writeln!(out, "        body {{");
    let _ = writeln!(out, "            font-family: Arial, sans-serif;");
    let _ = writeln!(
        out,
        "            background-color: {};",
        canvas.background.to_hex()
    );
    let _ = writeln!(out, "            display: flex;");
    let _ = writeln!(out, "            flex-direction: column;");
    let _ = writeln!(out, "            align-items: center;");
    let _ = writeln!(out, "            margin: 20px;");
    let _ = writeln!(out, "        }}");
    out.push_str(STYLESHEET);
    out.push_str("    </style>\n</head>\n<body>\n");
    out.push_str("    <h1>Saved Form</h1>\n");
    out.push_str("    <div class=\"form-container\">\n        <form>\n");

    for field in canvas.fields() {
        let _ = writeln!(out, "            {}", field_markup(field));
    }

    out.push_str("        </form>\n    </div>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory;
    use crate::model::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_field_template() {
        let field = factory::create("text").unwrap();
        assert_eq!(
            field_markup(&field),
            "<div class=\"field\"><label>Text Input:</label> \
             <input type=\"text\" placeholder=\"Enter text\"></div>"
        );
    }

    #[test]
    fn select_renders_every_option() {
        let mut field = factory::create("select").unwrap();
        field.options = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let markup = field_markup(&field);
        assert_eq!(markup.matches("<option>").count(), 3);
        assert!(markup.contains("<option>B</option>"));
    }

    #[test]
    fn select_with_zero_options_still_renders() {
        let mut field = factory::create("select").unwrap();
        field.options.clear();
        let markup = field_markup(&field);
        assert!(markup.contains("<select></select>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut field = factory::create("text").unwrap();
        field.label = Some("a <b> & \"c\"".to_string());
        let markup = field_markup(&field);
        assert!(markup.contains("a &lt;b&gt; &amp; &quot;c&quot;:"));
        assert!(!markup.contains("<b>"));
    }

    #[test]
    fn empty_canvas_is_a_valid_document() {
        let doc = emit_document(&Canvas::new());
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<form>\n        </form>"));
        assert!(doc.contains("background-color: #FFFFFF;"));
    }

    #[test]
    fn background_color_lands_on_body() {
        let mut canvas = Canvas::new();
        canvas.background = Color::from_hex("#336699").unwrap();
        let doc = emit_document(&canvas);
        assert!(doc.contains("background-color: #336699;"));
    }

    #[test]
    fn export_bundle_names_the_download() {
        let bundle = export(&Canvas::new());
        assert_eq!(bundle.filename, "saved_form.html");
        assert_eq!(bundle.mime, "text/html");
        assert!(!bundle.html.is_empty());
    }
}
