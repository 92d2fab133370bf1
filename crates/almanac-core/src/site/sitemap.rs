use crate::error::AlmanacError;
use crate::model::Invention;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

fn xml_err(e: impl std::fmt::Display) -> AlmanacError {
    AlmanacError::Xml(e.to_string())
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    name: &str,
    text: &str,
) -> Result<(), AlmanacError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)?;
    Ok(())
}

/// Render a sitemap listing every card page and its screenshot.
pub fn render(root_url: &str, inventions: &[Invention]) -> Result<String, AlmanacError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:image", IMAGE_NS));
    writer.write_event(Event::Start(urlset)).map_err(xml_err)?;

    for inv in inventions {
        let page = format!("{}/{}", root_url, inv.id);
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(xml_err)?;
        write_text_element(&mut writer, "loc", &page)?;
        writer
            .write_event(Event::Start(BytesStart::new("image:image")))
            .map_err(xml_err)?;
        write_text_element(&mut writer, "image:loc", &format!("{}/card.jpg", page))?;
        writer
            .write_event(Event::End(BytesEnd::new("image:image")))
            .map_err(xml_err)?;
        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(xml_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(xml_err)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(xml_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;

    fn invention(id: &str) -> Invention {
        Invention {
            id: id.into(),
            year: 0,
            dependencies: Vec::new(),
            title: id.into(),
            description: String::new(),
            summary: String::new(),
            inventor: String::new(),
            location: String::new(),
            field: "general".into(),
            url: String::new(),
        }
    }

    /// Collect the text of every `<loc>` and `<image:loc>` element.
    fn locs(xml: &str) -> Vec<String> {
        let mut reader = quick_xml::Reader::from_str(xml);
        let mut out = Vec::new();
        let mut in_loc = false;
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(e) => {
                    in_loc = matches!(e.name().as_ref(), b"loc" | b"image:loc");
                }
                Event::Text(e) if in_loc => out.push(e.unescape().unwrap().to_string()),
                Event::End(_) => in_loc = false,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }
        out
    }

    #[test]
    fn test_sitemap_lists_pages_and_cards() {
        let xml = render(
            "https://invention.cards",
            &[invention("fire"), invention("wheel")],
        )
        .unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\""));
        assert_eq!(
            locs(&xml),
            vec![
                "https://invention.cards/fire",
                "https://invention.cards/fire/card.jpg",
                "https://invention.cards/wheel",
                "https://invention.cards/wheel/card.jpg",
            ]
        );
    }

    #[test]
    fn test_ids_are_escaped() {
        let xml = render("https://x.org", &[invention("a&b")]).unwrap();
        assert!(xml.contains("https://x.org/a&amp;b"));
        assert_eq!(locs(&xml)[0], "https://x.org/a&b");
    }

    #[test]
    fn test_empty_catalog() {
        let xml = render("https://x.org", &[]).unwrap();
        assert!(locs(&xml).is_empty());
        assert!(xml.contains("<urlset"));
    }
}
