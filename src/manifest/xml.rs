use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::SfManifestError;
use crate::model::package::WILDCARD;
use crate::model::{Members, PackageManifest};

pub const METADATA_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

/// Renders the manifest as a `package.xml` document.
pub fn render(manifest: &PackageManifest) -> Result<String, SfManifestError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )?;
    emit(
        &mut writer,
        Event::Start(BytesStart::new("Package").with_attributes([("xmlns", METADATA_NAMESPACE)])),
    )?;

    for entry in &manifest.types {
        emit(&mut writer, Event::Start(BytesStart::new("types")))?;
        match &entry.members {
            Members::Wildcard => text_element(&mut writer, "members", WILDCARD)?,
            Members::Names(names) => {
                for name in names {
                    text_element(&mut writer, "members", name)?;
                }
            }
        }
        text_element(&mut writer, "name", &entry.name)?;
        emit(&mut writer, Event::End(BytesEnd::new("types")))?;
    }

    text_element(&mut writer, "version", &manifest.version)?;
    emit(&mut writer, Event::End(BytesEnd::new("Package")))?;

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| SfManifestError::XmlWrite(e.to_string()))
}

fn text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    text: &str,
) -> Result<(), SfManifestError> {
    emit(writer, Event::Start(BytesStart::new(tag)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(tag)))
}

fn emit(writer: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<(), SfManifestError> {
    writer
        .write_event(event)
        .map_err(|e| SfManifestError::XmlWrite(e.to_string()))
}
