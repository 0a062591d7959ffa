// src/tests/selector_tests.rs

use crate::scrape::{ScraperError, SelectorChain};
use scraper::{Html, Selector};

#[test]
fn first_matching_selector_wins() {
    let document = Html::parse_document(
        r#"<div>
            <p class="current">one</p>
            <p class="current">two</p>
            <p class="legacy">old</p>
        </div>"#,
    );

    let chain = SelectorChain::parse(&["p.current", "p.legacy"]).unwrap();
    let matches = chain.select_all(&document);

    // The legacy selector also matches, but the chain must stop at the
    // first selector with any hits.
    assert_eq!(matches.len(), 2);
    let texts: Vec<String> = matches
        .iter()
        .map(|el| el.text().collect::<String>())
        .collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[test]
fn falls_back_when_primary_matches_nothing() {
    let document = Html::parse_document(
        r#"<div>
            <p class="legacy">old one</p>
            <p class="legacy">old two</p>
            <p class="legacy">old three</p>
        </div>"#,
    );

    let chain = SelectorChain::parse(&["p.current", "p.legacy"]).unwrap();
    let matches = chain.select_all(&document);

    assert_eq!(matches.len(), 3);
}

#[test]
fn empty_when_nothing_matches() {
    let document = Html::parse_document("<div><span>irrelevant</span></div>");

    let chain = SelectorChain::parse(&["p.current", "p.legacy"]).unwrap();

    assert!(chain.select_all(&document).is_empty());
}

#[test]
fn select_within_scopes_to_the_container() {
    let document = Html::parse_document(
        r#"<div>
            <div class="card"><h6>first title</h6></div>
            <div class="card"><h6>second title</h6></div>
        </div>"#,
    );

    let card_selector = Selector::parse("div.card").unwrap();
    let cards: Vec<_> = document.select(&card_selector).collect();
    assert_eq!(cards.len(), 2);

    let chain = SelectorChain::parse(&["h6"]).unwrap();
    let title = chain.select_within(&cards[1]).unwrap();

    assert_eq!(title.text().collect::<String>(), "second title");
}

#[test]
fn select_within_uses_fallback_selector() {
    let document = Html::parse_document(
        r#"<div class="card"><span data-aut-id="itemTitle">fallback title</span></div>"#,
    );

    let card_selector = Selector::parse("div.card").unwrap();
    let card = document.select(&card_selector).next().unwrap();

    let chain = SelectorChain::parse(&["h6", r#"span[data-aut-id="itemTitle"]"#]).unwrap();
    let title = chain.select_within(&card).unwrap();

    assert_eq!(title.text().collect::<String>(), "fallback title");
}

#[test]
fn malformed_selector_fails_at_parse() {
    let err = SelectorChain::parse(&["div[unclosed"])
        .err()
        .expect("parse should fail");

    match err {
        ScraperError::InvalidSelector(msg) => {
            assert!(msg.contains("div[unclosed"), "message should name the source: {msg}");
        }
        other => panic!("expected InvalidSelector, got {other}"),
    }
}
