//! Shared dictionaries used by the pipeline.
//!
//! [`ResourceStore`] owns the editable stopword and correction stores and
//! their file locations. A run never reads the store directly: it works on a
//! [`PipelineResources`] snapshot, so edits made while a batch is in flight
//! only affect pipelines built afterwards.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::analysis::morphology::MorphologicalAnalyzer;
use crate::error::Result;
use crate::language::Language;
use crate::spelling::checker::DictionaryChecker;
use crate::spelling::dictionary::CorrectionDictionary;
use crate::spelling::pattern::PatternCorrector;
use crate::stopwords::StopwordStore;

/// Immutable resources for pipeline runs.
#[derive(Clone)]
pub struct PipelineResources {
    stopwords: BTreeMap<Language, Arc<HashSet<String>>>,
    corrections: Arc<CorrectionDictionary>,
    patterns: Arc<PatternCorrector>,
    checker: Option<Arc<dyn DictionaryChecker>>,
    analyzer: Option<Arc<dyn MorphologicalAnalyzer>>,
}

impl std::fmt::Debug for PipelineResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineResources")
            .field("corrections", &self.corrections.len())
            .field("checker", &self.checker.as_ref().map(|c| c.name()))
            .field("analyzer", &self.analyzer.as_ref().map(|a| a.name()))
            .finish()
    }
}

impl PipelineResources {
    /// Snapshot the given stores.
    pub fn new(stopwords: &StopwordStore, corrections: CorrectionDictionary) -> Result<Self> {
        Ok(PipelineResources {
            stopwords: Language::ALL
                .into_iter()
                .map(|language| (language, stopwords.snapshot(language)))
                .collect(),
            corrections: Arc::new(corrections),
            patterns: Arc::new(PatternCorrector::new()?),
            checker: None,
            analyzer: None,
        })
    }

    /// Default stopwords and no custom corrections.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&StopwordStore::new(), CorrectionDictionary::new())
    }

    /// Attach a dictionary checker for English spelling.
    pub fn with_checker(mut self, checker: Arc<dyn DictionaryChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Attach a morphological analyzer for lemmatization.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn MorphologicalAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Stopwords for `language`.
    pub fn stopwords(&self, language: Language) -> Arc<HashSet<String>> {
        self.stopwords.get(&language).cloned().unwrap_or_default()
    }

    pub fn corrections(&self) -> &Arc<CorrectionDictionary> {
        &self.corrections
    }

    pub fn patterns(&self) -> &Arc<PatternCorrector> {
        &self.patterns
    }

    pub fn checker(&self) -> Option<&Arc<dyn DictionaryChecker>> {
        self.checker.as_ref()
    }

    pub fn analyzer(&self) -> Option<&Arc<dyn MorphologicalAnalyzer>> {
        self.analyzer.as_ref()
    }
}

/// Editable stopword and correction stores, backed by JSON files.
pub struct ResourceStore {
    stopwords_path: PathBuf,
    corrections_path: PathBuf,
    stopwords: RwLock<StopwordStore>,
    corrections: RwLock<CorrectionDictionary>,
    checker: Option<Arc<dyn DictionaryChecker>>,
    analyzer: Option<Arc<dyn MorphologicalAnalyzer>>,
}

impl std::fmt::Debug for ResourceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceStore")
            .field("stopwords_path", &self.stopwords_path)
            .field("corrections_path", &self.corrections_path)
            .finish()
    }
}

impl ResourceStore {
    /// Load both stores, using defaults for files that do not exist yet.
    pub fn open<S: AsRef<Path>, C: AsRef<Path>>(stopwords_path: S, corrections_path: C) -> Result<Self> {
        let stopwords = StopwordStore::load_or_default(stopwords_path.as_ref())?;
        let corrections = CorrectionDictionary::load_or_empty(corrections_path.as_ref())?;

        Ok(ResourceStore {
            stopwords_path: stopwords_path.as_ref().to_path_buf(),
            corrections_path: corrections_path.as_ref().to_path_buf(),
            stopwords: RwLock::new(stopwords),
            corrections: RwLock::new(corrections),
            checker: None,
            analyzer: None,
        })
    }

    /// Attach a dictionary checker to every snapshot.
    pub fn with_checker(mut self, checker: Arc<dyn DictionaryChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Attach a morphological analyzer to every snapshot.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn MorphologicalAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Read access to the stopwords.
    pub fn stopwords(&self) -> parking_lot::RwLockReadGuard<'_, StopwordStore> {
        self.stopwords.read()
    }

    /// Read access to the corrections.
    pub fn corrections(&self) -> parking_lot::RwLockReadGuard<'_, CorrectionDictionary> {
        self.corrections.read()
    }

    /// Modify the stopwords in place.
    pub fn update_stopwords<R>(&self, f: impl FnOnce(&mut StopwordStore) -> R) -> R {
        f(&mut self.stopwords.write())
    }

    /// Modify the corrections in place.
    pub fn update_corrections<R>(&self, f: impl FnOnce(&mut CorrectionDictionary) -> R) -> R {
        f(&mut self.corrections.write())
    }

    /// Write the stopwords back to their file.
    pub fn save_stopwords(&self) -> Result<()> {
        self.stopwords.read().save_to_file(&self.stopwords_path)?;
        debug!("Saved stopwords to {}", self.stopwords_path.display());
        Ok(())
    }

    /// Write the corrections back to their file.
    pub fn save_corrections(&self) -> Result<()> {
        self.corrections.read().save_to_file(&self.corrections_path)?;
        debug!("Saved corrections to {}", self.corrections_path.display());
        Ok(())
    }

    pub fn stopwords_path(&self) -> &Path {
        &self.stopwords_path
    }

    pub fn corrections_path(&self) -> &Path {
        &self.corrections_path
    }

    /// Take an immutable snapshot for pipeline runs.
    pub fn snapshot(&self) -> Result<PipelineResources> {
        let stopwords = self.stopwords.read();
        let corrections = self.corrections.read().clone();

        let mut resources = PipelineResources::new(&stopwords, corrections)?;
        if let Some(checker) = &self.checker {
            resources = resources.with_checker(Arc::clone(checker));
        }
        if let Some(analyzer) = &self.analyzer {
            resources = resources.with_analyzer(Arc::clone(analyzer));
        }
        Ok(resources)
    }
}
