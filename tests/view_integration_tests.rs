use facetstore::entity::{Campaign, Contract, ContractStatus, Payment, PaymentStatus, UserStatus};
use facetstore::{
    CollectionView, RecordStore, StoreError, TableOutput, TransitionPolicy, Value, fixtures,
};

#[test]
fn test_admin_user_management_flow() {
    // search + role facet + suspend toggle, as the admin panel drives it
    let mut view = CollectionView::new(fixtures::users());

    view.set_search("example.com");
    view.set_facet("role", "creator");
    assert_eq!(view.visible().len(), 2);

    let suspended = view.store().get("1").unwrap().status.toggled();
    view.update("1", "status", Value::from(suspended.label())).unwrap();
    assert_eq!(view.store().get("1").unwrap().status, UserStatus::Suspended);

    // headline counts stay store-wide while the table is filtered
    assert_eq!(view.summary().count, 4);
    assert_eq!(view.summary().status_count("suspended"), 2);
}

#[test]
fn test_contract_signing_flow() {
    let mut view =
        CollectionView::new(fixtures::contracts()).with_policy(TransitionPolicy::Enforced);

    // pending contract goes out, then gets signed
    view.update("1", "status", Value::from("sent")).unwrap();
    view.update("1", "status", Value::from("signed")).unwrap();
    assert_eq!(
        view.store().get("1").unwrap().status,
        ContractStatus::Signed
    );

    // a rejected contract stays rejected
    let err = view.update("4", "status", Value::from("sent")).unwrap_err();
    assert!(matches!(err, StoreError::IllegalTransition { .. }));
}

#[test]
fn test_payment_request_flow() {
    let mut view = CollectionView::new(fixtures::payments()).with_summed_fields(&["amount"]);

    let request =
        Payment::request("Summer Fashion Collection 2024", "Sarah Johnson", 2_500.0, "2024-03-01")
            .unwrap();
    let id = request.id.clone();
    view.insert(request).unwrap();

    assert_eq!(view.summary().count, 5);
    assert_eq!(view.summary().sum("amount"), 30_500.0);
    assert_eq!(view.summary().status_count("pending"), 2);

    // the new request flows through the normal status workflow
    let mut view = view.with_policy(TransitionPolicy::Enforced);
    view.update(&id, "status", Value::from("paid")).unwrap();
    assert_eq!(view.store().get(&id).unwrap().status, PaymentStatus::Paid);
}

#[test]
fn test_campaign_dashboard_flow() {
    let mut view = CollectionView::new(fixtures::campaigns())
        .with_summed_fields(&["budget", "spent"]);

    let draft = Campaign::draft("Winter Launch", "2025-01-10", "2025-02-28", 30_000.0).unwrap();
    view.insert(draft).unwrap();

    let summary = view.summary();
    assert_eq!(summary.count, 5);
    assert_eq!(summary.sum("budget"), 295_000.0);
    assert_eq!(summary.percent_of("spent", "budget"), 41);

    view.set_facet("status", "draft");
    assert_eq!(view.visible().len(), 2);
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut view = CollectionView::new(fixtures::contracts());
    let dup = Contract::seeded("1", "X", "Y", ContractStatus::Drafted, "2024-02-01").unwrap();
    let err = view.insert(dup).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(id) if id == "1"));
    assert_eq!(view.summary().count, 4);
}

#[test]
fn test_json_ingestion_roundtrip() {
    let json = serde_json::to_string(fixtures::campaigns().records()).unwrap();
    let loaded: RecordStore<Campaign> = RecordStore::from_json(&json).unwrap();
    assert_eq!(loaded, fixtures::campaigns());
}

#[test]
fn test_json_ingestion_rejects_duplicates() {
    let json = r#"[
        {"id": "1", "creator": "A", "campaign": "C1", "status": "pending",
         "created_at": "2024-01-15", "pdf_url": ""},
        {"id": "1", "creator": "B", "campaign": "C2", "status": "signed",
         "created_at": "2024-01-10", "pdf_url": ""}
    ]"#;
    let err = RecordStore::<Contract>::from_json(json).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(_)));
}

#[test]
fn test_table_output_of_filtered_view() {
    let mut view = CollectionView::new(fixtures::creators());
    view.set_facet("platform", "Instagram");

    let table = TableOutput::from_records(&view.visible(), &["name", "followers", "platform"]);
    assert_eq!(table.row_count(), 1);
    let rendered = table.to_string();
    assert!(rendered.contains("Maria Rodriguez"));
    assert!(rendered.contains("89000"));
}
