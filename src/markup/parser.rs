use scraper::{ElementRef, Html, Selector};

use super::{CodeBlock, Document, NavLink, Row};

/// Line-number label used when a row carries no `.line-num` cell.
const MISSING_LINE_NUM: &str = "?";

/// Parse raw showcase HTML into a typed `Document`.
///
/// Every lookup is defensive: a block without rows, a row without a
/// line number, or a link without a target simply degrades (empty rows,
/// `"?"` label, skipped link) rather than failing the parse.
pub fn parse_document(html: &str) -> Document {
    let document = Html::parse_document(html);

    let title = select_one(&document, "title")
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_string();

    let blocks = Selector::parse(".code-block")
        .ok()
        .map(|sel| document.select(&sel).map(convert_block).collect())
        .unwrap_or_default();

    let links = Selector::parse(".nav-section a")
        .ok()
        .map(|sel| {
            document
                .select(&sel)
                .filter_map(convert_nav_link)
                .collect()
        })
        .unwrap_or_default();

    Document {
        title,
        blocks,
        links,
    }
}

fn convert_block(el: ElementRef<'_>) -> CodeBlock {
    let id = el.value().attr("id").unwrap_or_default().to_string();

    let title = select_within(el, ".code-header h3")
        .or_else(|| select_within(el, ".code-header"))
        .map(|h| h.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let rows = Selector::parse(".code-table tr")
        .ok()
        .map(|sel| el.select(&sel).map(convert_row).collect())
        .unwrap_or_default();

    let mut block = CodeBlock::new(id, title, rows);
    block.collapsed = el
        .value()
        .attr("class")
        .is_some_and(|c| c.split_whitespace().any(|cls| cls == "collapsed"));
    block
}

fn convert_row(el: ElementRef<'_>) -> Row {
    let line_number = select_within(el, ".line-num")
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| MISSING_LINE_NUM.to_string());

    let source = select_within(el, ".line-code")
        .map(|cell| cell.text().collect::<String>())
        .unwrap_or_else(|| el.text().collect::<String>())
        .trim_end()
        .to_string();

    let explanation = el
        .value()
        .attr("data-exp")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Row::new(line_number, source, explanation)
}

/// A nav link needs an `#id` fragment target; anything else is not a
/// block reference and is dropped.
fn convert_nav_link(el: ElementRef<'_>) -> Option<NavLink> {
    let href = el.value().attr("href")?;
    let target = href.strip_prefix('#')?;
    if target.is_empty() {
        return None;
    }
    let label = el.text().collect::<String>().trim().to_string();
    Some(NavLink::new(label, target))
}

fn select_one<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    Selector::parse(selector)
        .ok()
        .and_then(|sel| document.select(&sel).next())
}

fn select_within<'a>(el: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    Selector::parse(selector)
        .ok()
        .and_then(|sel| el.select(&sel).next())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
    <html>
        <head><title>MVC Showcase</title></head>
        <body>
            <nav class="nav-section">
                <a href="#model">Model</a>
                <a href="#view">View</a>
                <a href="https://example.com">External</a>
            </nav>
            <div class="code-block" id="model">
                <div class="code-header"><h3>Model.php</h3></div>
                <div class="code-body">
                    <table class="code-table">
                        <tr data-exp="Constructor initializes state">
                            <td class="line-num">12</td>
                            <td class="line-code">public function __construct()</td>
                        </tr>
                        <tr>
                            <td class="line-num">13</td>
                            <td class="line-code">{</td>
                        </tr>
                    </table>
                    <div class="exp-panel"></div>
                </div>
            </div>
            <div class="code-block collapsed" id="view">
                <div class="code-header"><h3>View.php</h3></div>
                <div class="code-body">
                    <table class="code-table">
                        <tr><td class="line-code">echo $html;</td></tr>
                    </table>
                </div>
            </div>
        </body>
    </html>
    "##;

    #[test]
    fn parses_blocks_and_rows() {
        let doc = parse_document(SAMPLE);
        assert_eq!(doc.title, "MVC Showcase");
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].id, "model");
        assert_eq!(doc.blocks[0].title, "Model.php");
        assert_eq!(doc.blocks[0].rows.len(), 2);
        assert_eq!(doc.blocks[0].rows[0].line_number, "12");
        assert_eq!(
            doc.blocks[0].rows[0].explanation.as_deref(),
            Some("Constructor initializes state")
        );
        assert!(doc.blocks[0].rows[1].explanation.is_none());
    }

    #[test]
    fn initial_collapsed_state_from_class() {
        let doc = parse_document(SAMPLE);
        assert!(!doc.blocks[0].collapsed);
        assert!(doc.blocks[1].collapsed);
    }

    #[test]
    fn missing_line_num_falls_back() {
        let doc = parse_document(SAMPLE);
        assert_eq!(doc.blocks[1].rows[0].line_number, "?");
    }

    #[test]
    fn nav_links_keep_fragment_targets_only() {
        let doc = parse_document(SAMPLE);
        assert_eq!(doc.links.len(), 2);
        assert_eq!(doc.links[0].target_block_id, "model");
        assert_eq!(doc.links[1].label, "View");
    }

    #[test]
    fn empty_document_degrades_silently() {
        let doc = parse_document("<html><body></body></html>");
        assert!(doc.blocks.is_empty());
        assert!(doc.links.is_empty());
        assert!(doc.title.is_empty());
    }
}
