//! Sitemap serialization
//!
//! Documents are written as UTF-8 XML per the sitemap protocol, indented with
//! two spaces, with `xhtml:link` elements for alternates. Escaping of URLs
//! is left to quick-xml.

use crate::sitemap::document::{Alternate, SitemapDocument, UrlEntry};
use crate::SitemapError;
use flate2::write::GzEncoder;
use flate2::Compression;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Namespace of the `urlset` element
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Namespace bound to the `xhtml` prefix
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Renders a document as pretty-printed XML
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - The XML bytes, ending with a newline
/// * `Err(SitemapError)` - The writer failed
pub fn render(document: &SitemapDocument) -> Result<Vec<u8>, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
    writer.write_event(Event::Start(urlset)).map_err(xml_error)?;

    for entry in &document.entries {
        write_entry(&mut writer, entry)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(xml_error)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_entry(writer: &mut Writer<Vec<u8>>, entry: &UrlEntry) -> Result<(), SitemapError> {
    writer
        .write_event(Event::Start(BytesStart::new("url")))
        .map_err(xml_error)?;

    writer
        .write_event(Event::Start(BytesStart::new("loc")))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(&entry.loc)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new("loc")))
        .map_err(xml_error)?;

    for link in entry.links() {
        write_link(writer, link)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("url")))
        .map_err(xml_error)?;
    Ok(())
}

fn write_link(writer: &mut Writer<Vec<u8>>, link: &Alternate) -> Result<(), SitemapError> {
    let mut element = BytesStart::new("xhtml:link");
    element.push_attribute(("rel", "alternate"));
    element.push_attribute(("hreflang", link.hreflang.as_str()));
    element.push_attribute(("href", link.href.as_str()));
    writer.write_event(Event::Empty(element)).map_err(xml_error)
}

fn xml_error(e: impl std::fmt::Display) -> SitemapError {
    SitemapError::Xml(e.to_string())
}

/// Gzips rendered sitemap bytes
pub fn compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}
