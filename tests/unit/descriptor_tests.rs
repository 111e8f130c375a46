/*!
 * Tests for dictionary descriptor files
 */

use std::path::{Path, PathBuf};
use anyhow::Result;
use vocabman::dictionary::{Descriptor, LanguagePair};
use vocabman::errors::DictionaryError;
use crate::common;

#[test]
fn test_parse_withBothFields_shouldReturnDescriptor() -> Result<()> {
    let content = "jsonFilePath=/words/cache/English-French.json\ntype=English-French\n";
    let descriptor = Descriptor::parse(content, Path::new("/words/cache/English-French.cfg"))?;

    assert_eq!(descriptor.data_path, PathBuf::from("/words/cache/English-French.json"));
    assert_eq!(descriptor.pair, LanguagePair::new("English", "French"));
    Ok(())
}

#[test]
fn test_parse_withValueContainingEquals_shouldSplitOnFirstOnly() -> Result<()> {
    let fields = Descriptor::parse_fields("jsonFilePath=/a=b/c.json\n\n  \ntype=A-B")
        .map_err(anyhow::Error::msg)?;

    assert_eq!(fields["jsonFilePath"], "/a=b/c.json");
    assert_eq!(fields["type"], "A-B");
    Ok(())
}

#[test]
fn test_parse_withRelativePath_shouldResolveAgainstDescriptorDir() -> Result<()> {
    let content = "jsonFilePath=English-French.json\ntype=English-French";
    let descriptor = Descriptor::parse(content, Path::new("/words/cache/English-French.cfg"))?;

    assert_eq!(descriptor.data_path, PathBuf::from("/words/cache/English-French.json"));
    Ok(())
}

#[test]
fn test_parse_withMalformedContent_shouldFailWithConfigCorrupt() {
    let origin = Path::new("bad.cfg");
    let cases = [
        "jsonFilePath=/x.json\ntype English-French",
        "type=English-French",
        "jsonFilePath=/x.json",
        "jsonFilePath=/x.json\ntype=EnglishFrench",
        "jsonFilePath=\ntype=English-French",
    ];

    for content in cases {
        let result = Descriptor::parse(content, origin);
        assert!(
            matches!(result, Err(DictionaryError::ConfigCorrupt { .. })),
            "{:?} should be corrupt",
            content
        );
    }
}

#[test]
fn test_save_then_load_shouldReturnSameDescriptor() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let pair = LanguagePair::new("Russian", "Norwegian");
    let path = Descriptor::path_for(temp_dir.path(), &pair);
    let descriptor = Descriptor::new(Descriptor::data_path_for(temp_dir.path(), &pair), pair);

    descriptor.save(&path)?;

    assert!(path.ends_with("Russian-Norwegian.cfg"));
    assert_eq!(Descriptor::load(&path)?, descriptor);
    Ok(())
}

#[test]
fn test_load_withMissingFile_shouldFailWithNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = Descriptor::load(&temp_dir.path().join("missing.cfg"));

    assert!(matches!(result, Err(DictionaryError::NotFound(_))));
    Ok(())
}

#[test]
fn test_load_withNonUtf8File_shouldFailWithConfigCorrupt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("English-French.cfg");
    std::fs::write(&path, [b't', b'y', b'p', b'e', b'=', 0xff, 0xfe])?;

    let result = Descriptor::load(&path);

    assert!(matches!(result, Err(DictionaryError::ConfigCorrupt { .. })));
    Ok(())
}
