//! Document elements and the operations run over them (Visitor).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub source: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One operation per element kind.
pub trait DocumentVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph);
    fn visit_image(&mut self, image: &Image);
    fn visit_table(&mut self, table: &Table);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentElement {
    Paragraph(Paragraph),
    Image(Image),
    Table(Table),
}

impl DocumentElement {
    pub fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            DocumentElement::Paragraph(p) => visitor.visit_paragraph(p),
            DocumentElement::Image(i) => visitor.visit_image(i),
            DocumentElement::Table(t) => visitor.visit_table(t),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub elements: Vec<DocumentElement>,
}

impl Document {
    pub fn new(elements: Vec<DocumentElement>) -> Self {
        Self { elements }
    }

    /// Paragraph, image, a 3x3 people table, paragraph.
    pub fn sample() -> Self {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        Self::new(vec![
            DocumentElement::Paragraph(Paragraph {
                text: "Hello, World!".into(),
            }),
            DocumentElement::Image(Image {
                source: "cat.jpg".into(),
                alt_text: "A cute cat".into(),
            }),
            DocumentElement::Table(Table {
                headers: strings(&["Name", "Age", "City"]),
                rows: vec![
                    strings(&["John Doe", "30", "New York"]),
                    strings(&["Jane Smith", "25", "Los Angeles"]),
                    strings(&["Bob Johnson", "35", "Chicago"]),
                ],
            }),
            DocumentElement::Paragraph(Paragraph {
                text: "This is a test document.".into(),
            }),
        ])
    }

    pub fn accept<V: DocumentVisitor + ?Sized>(&self, visitor: &mut V) {
        for element in &self.elements {
            element.accept(visitor);
        }
    }
}

/// Renders elements as HTML lines.
#[derive(Debug, Default)]
pub struct HtmlExportVisitor {
    lines: Vec<String>,
}

impl HtmlExportVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl DocumentVisitor for HtmlExportVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.lines.push(format!("<p>{}</p>", paragraph.text));
    }

    fn visit_image(&mut self, image: &Image) {
        self.lines.push(format!(
            "<img src='{}' alt='{}' />",
            image.source, image.alt_text
        ));
    }

    fn visit_table(&mut self, table: &Table) {
        self.lines.push("<table border='1'>".to_string());
        self.lines.push("  <tr>".to_string());
        for header in &table.headers {
            self.lines.push(format!("    <th>{header}</th>"));
        }
        self.lines.push("  </tr>".to_string());
        for row in &table.rows {
            self.lines.push("  <tr>".to_string());
            for cell in row {
                self.lines.push(format!("    <td>{cell}</td>"));
            }
            self.lines.push("  </tr>".to_string());
        }
        self.lines.push("</table>".to_string());
    }
}

/// Counts words, images, tables and table cells.
///
/// Words are space-separated pieces of paragraph text and table cells; headers
/// count as cells but not as words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsVisitor {
    pub word_count: usize,
    pub image_count: usize,
    pub table_count: usize,
    pub table_cell_count: usize,
}

fn words(text: &str) -> usize {
    text.split(' ').count()
}

impl DocumentVisitor for StatisticsVisitor {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.word_count += words(&paragraph.text);
    }

    fn visit_image(&mut self, _image: &Image) {
        self.image_count += 1;
    }

    fn visit_table(&mut self, table: &Table) {
        self.table_count += 1;
        self.table_cell_count += table.headers.len();
        for row in &table.rows {
            self.table_cell_count += row.len();
            self.word_count += row.iter().map(|cell| words(cell)).sum::<usize>();
        }
    }
}

impl fmt::Display for StatisticsVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Statistics: {} words, {} images, {} tables ({} cells)",
            self.word_count, self.image_count, self.table_count, self.table_cell_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_on_sample() {
        let mut stats = StatisticsVisitor::default();
        Document::sample().accept(&mut stats);
        assert_eq!(
            stats.to_string(),
            "Statistics: 21 words, 1 images, 1 tables (12 cells)"
        );
    }

    #[test]
    fn test_html_export_on_sample() {
        let mut html = HtmlExportVisitor::new();
        Document::sample().accept(&mut html);
        let lines = html.into_lines();
        assert_eq!(lines.first().unwrap(), "<p>Hello, World!</p>");
        assert_eq!(lines[1], "<img src='cat.jpg' alt='A cute cat' />");
        assert_eq!(lines.iter().filter(|l| l.trim() == "<tr>").count(), 4);
        assert_eq!(lines.last().unwrap(), "<p>This is a test document.</p>");
    }
}
