use framecount_core::*;
use std::path::PathBuf;

fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("demos/checkout-flows.json")
}

#[test]
fn test_demo_document_is_valid() {
    let document = load_validated_document(demo_path()).expect("demo document should load");
    assert_eq!(document.list_selection().len(), 6);
}

#[test]
fn test_demo_session_groups_overlapping_prefixes() {
    let document = load_validated_document(demo_path()).unwrap();
    let mut session = PluginSession::new(document);

    let reply = session.handle(Request::Count {
        prefix_input: Some("Daftar Produk, Dashboard, Da".to_string()),
    });
    let Some(Response::CountResult { result }) = reply else {
        panic!("count should reply with a result");
    };

    let groups = result.groups.as_ref().unwrap();
    let prefixes: Vec<&str> = groups.iter().map(|g| g.prefix.as_str()).collect();
    assert_eq!(prefixes, vec!["Daftar Produk", "Dashboard"]);
    assert_eq!(result.grouped_count, Some(4));

    let rows = display_groups(&result);
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Daftar Produk", "Dashboard", "Login", "Checkout"]);

    let rendered = session.handle(Request::RenderSummary { result });
    assert!(matches!(
        rendered,
        Some(Response::RenderSummaryResult { success: true, .. })
    ));
    assert!(session.canvas().is_modified());

    session.handle(Request::Select {
        item_id: "1:7".to_string(),
    });
    assert_eq!(session.canvas().selection, vec!["1:7".to_string()]);

    let recount = session.count(None);
    assert_eq!(recount.total, 1);
    assert_eq!(recount.matches[0].name, "Submit Button");
}
