//! Session-flow tests for the hemisphere extractor: navigation order,
//! back-navigation between items, and all-or-nothing failure semantics.

mod helpers;

use helpers::MockSession;
use mars_snapshot::error::ExtractError;
use mars_snapshot::extract::hemispheres::{hemisphere_images, HEMISPHERES_URL};

const LISTING: &str = r#"
    <html><body>
      <div class="item">
        <a class="itemLink product-item" href="cerberus.html"><h3>Cerberus Hemisphere Enhanced</h3></a>
      </div>
      <div class="item">
        <a class="itemLink product-item" href="valles.html"><h3>Valles Marineris Hemisphere Enhanced</h3></a>
      </div>
    </body></html>
"#;

const CERBERUS: &str =
    r#"<ul><li><a href="images/cerberus_enhanced.jpg">Sample</a></li></ul>"#;
const VALLES: &str =
    r#"<ul><li><a href="images/valles_marineris_enhanced.jpg">Sample</a></li></ul>"#;

#[tokio::test]
async fn test_visits_each_detail_page_in_listing_order() {
    let mut session = MockSession::new()
        .page(HEMISPHERES_URL, LISTING)
        .page("https://marshemispheres.com/cerberus.html", CERBERUS)
        .page("https://marshemispheres.com/valles.html", VALLES);

    let records = hemisphere_images(&mut session).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Cerberus Hemisphere Enhanced");
    assert_eq!(
        records[0].img_url,
        "https://marshemispheres.com/images/cerberus_enhanced.jpg"
    );
    assert_eq!(records[1].title, "Valles Marineris Hemisphere Enhanced");
    assert_eq!(
        records[1].img_url,
        "https://marshemispheres.com/images/valles_marineris_enhanced.jpg"
    );

    assert_eq!(
        session.visits,
        vec![
            HEMISPHERES_URL.to_string(),
            "https://marshemispheres.com/cerberus.html".to_string(),
            "https://marshemispheres.com/valles.html".to_string(),
        ]
    );
    // One back-navigation per item restores the listing for the next one.
    assert_eq!(session.backs, 2);
    assert_eq!(session.current_url(), Some(HEMISPHERES_URL));
}

#[tokio::test]
async fn test_one_broken_detail_page_discards_everything() {
    let mut session = MockSession::new()
        .page(HEMISPHERES_URL, LISTING)
        .page("https://marshemispheres.com/cerberus.html", CERBERUS)
        .page(
            "https://marshemispheres.com/valles.html",
            "<ul><li>download unavailable</li></ul>",
        );

    let result = hemisphere_images(&mut session).await;

    // The first item extracted fine, but the failure on the second discards
    // the partial progress entirely.
    assert!(matches!(result, Err(ExtractError::Structural("li a[href]"))));
}

#[tokio::test]
async fn test_empty_listing_yields_empty_sequence() {
    let mut session = MockSession::new().page(
        HEMISPHERES_URL,
        "<html><body><div class=\"collection\"></div></body></html>",
    );

    let records = hemisphere_images(&mut session).await.unwrap();
    assert!(records.is_empty());
    assert_eq!(session.backs, 0);
}
