//! Plain text extraction from docx-rs paragraphs
//!
//! Only character content is kept. Tabs become `\t`, breaks become `\n`,
//! inserted runs count as text and deleted runs do not.

/// Concatenated text of every run in the paragraph, untrimmed
pub(crate) fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&para.children, &mut text);
    text
}

fn push_paragraph_children(children: &[docx_rs::ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run_text(run, text),
            docx_rs::ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        push_run_text(run, text);
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                push_paragraph_children(&link.children, text);
            }
            docx_rs::ParagraphChild::Delete(_) => {}
            _ => {}
        }
    }
}

fn push_run_text(run: &docx_rs::Run, text: &mut String) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => text.push_str(&text_elem.text),
            docx_rs::RunChild::Tab(_) => text.push('\t'),
            // Break types are private; page and column breaks read as a line break too
            docx_rs::RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
