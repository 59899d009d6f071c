// libcantonese/libjyutping/src/ruby/render.rs
//
// Output formats for an alignment.
//
// plain text: every slot's text in order, one ASCII space between slots,
//             the slot's tokens glued directly after its text. Text without
//             an alignable slot comes back exactly as it was given.
// zipped:     (slot text, tokens joined by a space) pairs; blank slots
//             without tokens are skipped.
// html:       one <ruby> element with an <rb>/<rt> pair per zipped entry.

use super::Annotated;

pub fn plain_text(annotated: &[Annotated<'_>]) -> String {
    if !annotated.iter().any(|a| a.slot.is_alignable()) {
        return annotated.iter().map(|a| a.slot.text).collect();
    }
    let mut out = String::new();
    for (i, a) in annotated.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(a.slot.text);
        for t in &a.tokens {
            out.push_str(t);
        }
    }
    out
}

fn is_blank(a: &Annotated<'_>) -> bool {
    a.slot.text.trim().is_empty() && a.tokens.is_empty()
}

pub fn zipped(annotated: &[Annotated<'_>]) -> Vec<(String, String)> {
    annotated
        .iter()
        .filter(|a| !is_blank(a))
        .map(|a| (a.slot.text.to_string(), a.tokens.join(" ")))
        .collect()
}

pub fn html(annotated: &[Annotated<'_>]) -> String {
    let mut out = String::from("<ruby>");
    for a in annotated.iter().filter(|a| !is_blank(a)) {
        out.push_str("<rb>");
        escape_into(a.slot.text, &mut out);
        out.push_str("</rb><rt>");
        escape_into(&a.tokens.join(" "), &mut out);
        out.push_str("</rt>");
    }
    out.push_str("</ruby>");
    out
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
