use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::models::BookRecord;
use crate::price;

static BOOK_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector("article.product_pod"));
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("h3 a"));
static PRICE_TEXT: LazyLock<Selector> = LazyLock::new(|| selector("p.price_color"));
static AVAILABILITY_TEXT: LazyLock<Selector> =
    LazyLock::new(|| selector("p.instock.availability"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector must parse")
}

/// Extract the book records from one catalogue page, in document order.
///
/// A block missing any of the expected substructure is omitted without
/// raising. A block whose price text does not parse keeps its record with
/// `price: None`.
pub fn extract(markup: &str) -> Vec<BookRecord> {
    let document = Html::parse_document(markup);
    document
        .select(&BOOK_BLOCK)
        .filter_map(extract_block)
        .collect()
}

fn extract_block(block: ElementRef<'_>) -> Option<BookRecord> {
    let title = block
        .select(&TITLE_LINK)
        .next()?
        .value()
        .attr("title")?
        .to_string();
    let raw_price = collect_text(block.select(&PRICE_TEXT).next()?);
    let availability = collect_text(block.select(&AVAILABILITY_TEXT).next()?)
        .trim()
        .to_string();

    Some(BookRecord {
        title,
        price: price::from_catalog_text(&raw_price),
        availability,
    })
}

fn collect_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
