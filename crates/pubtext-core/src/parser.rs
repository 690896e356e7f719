//! Streaming citation parser using quick-xml
//!
//! Pulls `<MedlineCitation>` subtrees out of a distribution file one at a
//! time. Cardinality rules live in the runner; the parser only collects
//! what it sees, but it must count *direct* children only — a `<PMID>`
//! nested inside `<CommentsCorrections>` is not the citation's PMID, so
//! unrecognized subtrees are skipped wholesale.

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ExtractError;

/// One `<AbstractText>` element: optional `Label` attribute plus flattened
/// character content (nested inline markup contributes its text).
#[derive(Debug, Default, Clone)]
pub struct Segment {
    pub label: Option<String>,
    pub text: String,
}

/// Direct children of an `<Article>` element relevant to extraction.
#[derive(Debug, Default)]
pub struct RawArticle {
    pub titles: Vec<String>,
    pub abstracts: Vec<Vec<Segment>>,
}

/// Direct children of a `<MedlineCitation>` element relevant to extraction.
///
/// Vectors rather than single values so the runner can check cardinality
/// and report violations precisely.
#[derive(Debug, Default)]
pub struct RawCitation {
    pub pmids: Vec<String>,
    pub articles: Vec<RawArticle>,
    pub other_abstracts: Vec<Vec<Segment>>,
}

/// Stream citations from `source` and hand each to `handle`.
///
/// Each citation subtree is parsed into a transient [`RawCitation`] that
/// is dropped once the handler returns, so peak memory stays proportional
/// to one citation regardless of input size. Handler errors abort the
/// stream immediately.
pub fn for_each_citation<R, F>(source: R, mut handle: F) -> Result<(), ExtractError>
where
    R: BufRead,
    F: FnMut(RawCitation) -> Result<(), ExtractError>,
{
    // No text trimming: titles and abstract bodies must come through
    // verbatim, including whitespace around nested inline markup. The
    // structural loops ignore inter-element whitespace anyway.
    let mut reader = Reader::from_reader(source);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"MedlineCitation" => {
                let citation = parse_citation(&mut reader)?;
                handle(citation)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn parse_citation<R: BufRead>(reader: &mut Reader<R>) -> Result<RawCitation, ExtractError> {
    let mut citation = RawCitation::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"PMID" => citation
                    .pmids
                    .push(read_text_content(reader, b"PMID")?),
                b"Article" => citation.articles.push(parse_article(reader)?),
                b"OtherAbstract" => citation
                    .other_abstracts
                    .push(parse_segments(reader, b"OtherAbstract")?),
                other => {
                    let end = other.to_owned();
                    skip_element(reader, &end)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"MedlineCitation" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(citation)
}

fn parse_article<R: BufRead>(reader: &mut Reader<R>) -> Result<RawArticle, ExtractError> {
    let mut article = RawArticle::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"ArticleTitle" => article
                    .titles
                    .push(read_text_content(reader, b"ArticleTitle")?),
                b"Abstract" => article.abstracts.push(parse_segments(reader, b"Abstract")?),
                other => {
                    let end = other.to_owned();
                    skip_element(reader, &end)?;
                }
            },
            Event::End(e) if e.name().as_ref() == b"Article" => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(article)
}

/// Collect `<AbstractText>` children of an Abstract/OtherAbstract block.
fn parse_segments<R: BufRead>(
    reader: &mut Reader<R>,
    end_tag: &[u8],
) -> Result<Vec<Segment>, ExtractError> {
    let mut segments = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"AbstractText" => {
                let label = label_attr(&e);
                let text = read_text_content(reader, b"AbstractText")?;
                segments.push(Segment { label, text });
            }
            // <AbstractText/> occurs in the wild; keep it as an empty segment
            Event::Empty(e) if e.name().as_ref() == b"AbstractText" => {
                segments.push(Segment {
                    label: label_attr(&e),
                    text: String::new(),
                });
            }
            Event::Start(e) => {
                let end = e.name().as_ref().to_owned();
                skip_element(reader, &end)?;
            }
            Event::End(e) if e.name().as_ref() == end_tag => break,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(segments)
}

fn label_attr(e: &BytesStart) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"Label")
        .map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

/// Consume events until the matching end tag, discarding everything.
fn skip_element<R: BufRead>(reader: &mut Reader<R>, end_tag: &[u8]) -> Result<(), ExtractError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() == end_tag {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Read the text content of the current element, flattening nested tags
/// (like `<i>`, `<sup>`) into their character data.
fn read_text_content<R: BufRead>(
    reader: &mut Reader<R>,
    end_tag: &[u8],
) -> Result<String, ExtractError> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::Start(_) => depth += 1,
            Event::End(e) => {
                depth -= 1;
                if depth == 0 && e.name().as_ref() == end_tag {
                    break;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
