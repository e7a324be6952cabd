use anyhow::{Context, Result};

/// Concatenated text of every page, in page order. Pages without a text
/// layer contribute nothing, so the result may be empty (the caller decides
/// whether that is an error).
pub fn extract_pdf_text(data: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(data).context("failed to extract text from PDF")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds a one-page PDF from scratch so the test does not depend on a
    // binary fixture. Offsets in the xref table are computed from the
    // assembled body, not hard-coded.
    fn one_page_pdf(page_text: Option<&str>) -> Vec<u8> {
        let content = match page_text {
            Some(text) => format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text),
            None => String::new(),
        };

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>".to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", content.len(), content),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (index, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", index + 1, body));
        }

        let xref_offset = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        ));

        pdf.into_bytes()
    }

    #[test]
    fn extracts_text_from_a_page_with_a_text_object() {
        let pdf = one_page_pdf(Some("Hello"));
        let text = extract_pdf_text(&pdf).unwrap();
        assert!(text.contains("Hello"), "extracted text was {:?}", text);
    }

    #[test]
    fn page_without_text_yields_only_whitespace() {
        let pdf = one_page_pdf(None);
        let text = extract_pdf_text(&pdf).unwrap();
        assert!(text.trim().is_empty(), "extracted text was {:?}", text);
    }

    #[test]
    fn rejects_bytes_that_are_not_a_pdf() {
        let result = extract_pdf_text(b"this is not a pdf document");
        assert!(result.is_err());
    }
}
