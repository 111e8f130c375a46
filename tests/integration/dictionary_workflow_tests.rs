/*!
 * Integration tests for the dictionary workflow
 */

use anyhow::Result;
use vocabman::app_config::{EmptyListPolicy, ExportMode};
use vocabman::dictionary::store::read_entries;
use vocabman::dictionary::Registry;
use vocabman::errors::DictionaryError;
use crate::common::{self, strings};

/// Test the full life of a word, from creation of its dictionary to export
#[test]
fn test_dictionary_workflow_withFullProcess_shouldSucceed() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = common::test_config(&temp_dir);
    let mut registry = Registry::discover(&config)?;
    let ef = "English-French";

    registry.create(ef)?;

    registry.add_pair(ef, "cat", strings(&["chat"]))?;
    assert_eq!(registry.translations(ef, "cat")?, strings(&["chat"]));

    registry.add_translation(ef, "cat", "minou")?;
    assert_eq!(registry.translations(ef, "cat")?, strings(&["chat", "minou"]));

    registry.change_translation(ef, "cat", "chat", "le chat")?;
    assert_eq!(registry.translations(ef, "cat")?, strings(&["le chat", "minou"]));

    registry.delete_translation(ef, "cat", "minou")?;
    assert_eq!(registry.translations(ef, "cat")?, strings(&["le chat"]));

    let exported = registry.export_pair(ef, "cat", "catexport")?;
    let content = read_entries(&exported)?;
    assert_eq!(exported, config.export_dir().join("catexport.json"));
    assert_eq!(content.len(), 1);
    assert_eq!(content["cat"], strings(&["le chat"]));
    assert_eq!(registry.translations(ef, "cat")?, strings(&["le chat"]));

    assert!(matches!(
        registry.translations(ef, "dog"),
        Err(DictionaryError::KeyNotFound(_))
    ));

    Ok(())
}

/// Test that the configured policies reach the stores found at startup
#[test]
fn test_discover_withNonDefaultPolicies_shouldApplyThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::test_config(&temp_dir);
    config.empty_list_policy = EmptyListPolicy::Keep;
    config.export_mode = ExportMode::Merge;
    {
        let mut registry = Registry::discover(&config)?;
        registry.create("English-French")?;
        registry.add_pair("English-French", "cat", strings(&["chat"]))?;
        registry.add_pair("English-French", "dog", strings(&["chien"]))?;
    }

    let registry = Registry::discover(&config)?;
    registry.delete_translation("English-French", "cat", "chat")?;
    registry.export_pair("English-French", "cat", "pets")?;
    let path = registry.export_pair("English-French", "dog", "pets")?;

    assert_eq!(registry.translations("English-French", "cat")?, Vec::<String>::new());
    assert_eq!(read_entries(&path)?.len(), 2);
    Ok(())
}
