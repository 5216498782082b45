//! Ingestion Module Tests
//!
//! Builds small document trees in a temporary directory and indexes them.

#[cfg(test)]
mod tests {
    use crate::ingestion::indexer::index_directory;
    use crate::ingestion::reader::{read_html, read_markup};
    use crate::ingestion::types::DocumentKind;
    use crate::storage::IndexStore;
    use std::fs;
    use std::path::Path;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_document_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("xhtml"), Some(DocumentKind::Markup));
        assert_eq!(DocumentKind::from_extension("XML"), Some(DocumentKind::Markup));
        assert_eq!(DocumentKind::from_extension("html"), Some(DocumentKind::Html));
        assert_eq!(DocumentKind::from_extension("htm"), Some(DocumentKind::Html));
        assert_eq!(DocumentKind::from_extension("txt"), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::from_extension("md"), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::from_extension("rs"), None);
        assert_eq!(DocumentKind::from_extension("json"), None);
    }

    #[test]
    fn test_read_markup_separates_text_nodes() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "doc.xhtml",
            "<html><body><strong>Name</strong><strong>2.0</strong></body></html>",
        );

        let content = read_markup(&dir.path().join("doc.xhtml")).unwrap();

        assert!(content.contains("Name 2.0"));
        assert!(!content.contains("Name2.0"));
    }

    #[test]
    fn test_read_markup_rejects_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "broken.xml", "<a><b></a>");

        assert!(read_markup(&dir.path().join("broken.xml")).is_err());
    }

    #[test]
    fn test_index_directory_walks_recursively() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "gl4/glClear.xhtml",
            "<html><body><p>glClear clears buffers</p></body></html>",
        );
        write(dir.path(), "gl4/nested/notes.txt", "buffers and more buffers");
        write(dir.path(), "README.md", "# Readme");
        write(dir.path(), "main.rs", "fn main() {}");

        let store = IndexStore::new();
        let report = index_directory(dir.path(), &store).unwrap();

        assert_eq!(report.indexed, 3);
        assert_eq!(report.skipped, 0);
        assert_eq!(store.len(), 3);

        let notes = store
            .get(&dir.path().join("gl4/nested/notes.txt"))
            .expect("nested document should be indexed");
        assert_eq!(notes.get("BUFFERS"), Some(&2));

        let page = store.get(&dir.path().join("gl4/glClear.xhtml")).unwrap();
        assert_eq!(page.get("GLCLEAR"), Some(&1));
        assert!(!page.contains_key("P"), "markup tags are not indexed");

        assert!(store.get(&dir.path().join("main.rs")).is_none());
    }

    #[test]
    fn test_index_directory_skips_broken_documents() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good.xml", "<doc>fine</doc>");
        write(dir.path(), "broken.xml", "<doc><open></doc>");

        let store = IndexStore::new();
        let report = index_directory(dir.path(), &store).unwrap();

        assert_eq!(report.indexed, 1);
        assert_eq!(report.skipped, 1);
        assert!(store.get(&dir.path().join("good.xml")).is_some());
    }

    #[test]
    fn test_index_directory_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();

        let result = index_directory(&dir.path().join("nope"), &IndexStore::new());

        assert!(result.is_err());
    }

    #[test]
    fn test_index_directory_empty_dir() {
        let dir = tempfile::tempdir().unwrap();

        let report = index_directory(dir.path(), &IndexStore::new()).unwrap();

        assert_eq!(report.indexed, 0);
        assert_eq!(report.skipped, 0);
    }

    // ============================================================
    // LENIENT MARKUP TESTS
    // ============================================================

    #[test]
    fn test_read_markup_resolves_html_entities() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "ent.xhtml",
            "<html><body><p>glClear&nbsp;clears buffers &copy; Khronos&mdash;2014</p></body></html>",
        );

        let content = read_markup(&dir.path().join("ent.xhtml")).unwrap();

        let terms = crate::search::lexer::tokenize(&content);
        assert!(terms.contains(&"GLCLEAR".to_string()));
        assert!(terms.contains(&"CLEARS".to_string()));
        assert!(terms.contains(&"KHRONOS".to_string()));
        assert!(!content.contains("&nbsp;"));
        assert!(content.contains('©'));
    }

    #[test]
    fn test_read_markup_keeps_text_before_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "partial.xml", "<doc><p>kept text</p><open></doc>");

        let content = read_markup(&dir.path().join("partial.xml")).unwrap();

        assert!(content.contains("kept text"));
    }

    #[test]
    fn test_read_html_handles_void_tags_and_skips_code() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "page.html",
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Guide</title>\
             <style>p { color: red }</style></head>\
             <body><p>rust buffers<br>more</p><script>var hidden = 1;</script></body></html>",
        );

        let content = read_html(&dir.path().join("page.html")).unwrap();

        assert!(content.contains("rust buffers"));
        assert!(content.contains("more"));
        assert!(content.contains("Guide"));
        assert!(!content.contains("hidden"));
        assert!(!content.contains("color"));
    }

    #[test]
    fn test_index_directory_html_and_entity_pages() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "page.html",
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head>\
             <body><p>rust buffers<br>more</p></body></html>",
        );
        write(
            dir.path(),
            "ent.xhtml",
            "<html><body><p>glClear&nbsp;clears buffers</p></body></html>",
        );

        let store = IndexStore::new();
        let report = index_directory(dir.path(), &store).unwrap();

        assert_eq!(report.indexed, 2);
        assert_eq!(report.skipped, 0);

        let page = store.get(&dir.path().join("page.html")).unwrap();
        assert_eq!(page.get("RUST"), Some(&1));
        assert_eq!(page.get("MORE"), Some(&1));

        let ent = store.get(&dir.path().join("ent.xhtml")).unwrap();
        assert_eq!(ent.get("GLCLEAR"), Some(&1));
        assert_eq!(ent.get("CLEARS"), Some(&1));
    }
}
