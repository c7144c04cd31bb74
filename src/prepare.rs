use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::answer_encoding::data::AnswerVocabulary;
use crate::answer_encoding::encode::{answer_indices, one_hot};
use crate::config::PrepareConfig;
use crate::data::{DatasetBundle, ImageId, QuestionRecord, Split};
use crate::error::Result;
use crate::image_preprocess::load::{canonical_shape, load_image_set, stack_images};
use crate::provider::DatasetProvider;
use crate::question_encoding::tokenize::fit_vocabulary;
use crate::question_encoding::vectorize::vectorize;

/// Holds at most one prepared bundle. Once filled, every lookup hands back the
/// same `Arc` until [`BundleCache::clear`] is called.
#[derive(Debug, Default)]
pub struct BundleCache {
    slot: Mutex<Option<Arc<DatasetBundle>>>,
}

impl BundleCache {
    pub const fn new() -> Self {
        BundleCache {
            slot: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<DatasetBundle>>> {
        // the slot is only ever replaced whole, so a poisoned lock is still consistent
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self) -> Option<Arc<DatasetBundle>> {
        self.lock().clone()
    }

    /// Return the cached bundle, or run `init` and cache its result. A failed
    /// `init` leaves the cache empty.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<DatasetBundle>>
    where
        F: FnOnce() -> Result<DatasetBundle>,
    {
        let mut slot = self.lock();
        if let Some(bundle) = slot.as_ref() {
            return Ok(Arc::clone(bundle));
        }
        let bundle = Arc::new(init()?);
        *slot = Some(Arc::clone(&bundle));
        Ok(bundle)
    }

    /// Drop the cached bundle, returning it if there was one.
    pub fn clear(&self) -> Option<Arc<DatasetBundle>> {
        self.lock().take()
    }
}

static PROCESS_CACHE: BundleCache = BundleCache::new();

/// Prepare the dataset once per process. Later calls return the first result
/// whatever `provider` and `config` they pass, until [`clear_cache`].
pub fn prepare<P: DatasetProvider + ?Sized>(provider: &P, config: &PrepareConfig) -> Result<Arc<DatasetBundle>> {
    PROCESS_CACHE.get_or_try_init(|| build_bundle(provider, config))
}

pub fn clear_cache() {
    PROCESS_CACHE.clear();
}

/// A provider and config paired with their own bundle cache.
pub struct DatasetPreparer<P> {
    provider: P,
    config: PrepareConfig,
    cache: BundleCache,
}

impl<P: DatasetProvider> DatasetPreparer<P> {
    pub fn new(provider: P, config: PrepareConfig) -> Self {
        DatasetPreparer {
            provider,
            config,
            cache: BundleCache::new(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Compute the bundle on first call; afterwards return the cached one.
    pub fn prepare(&self) -> Result<Arc<DatasetBundle>> {
        self.cache.get_or_try_init(|| build_bundle(&self.provider, &self.config))
    }

    pub fn is_prepared(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Forget the cached bundle so the next `prepare` recomputes it.
    pub fn reset(&self) {
        self.cache.clear();
    }
}

fn unzip_questions(records: Vec<QuestionRecord>) -> (Vec<String>, Vec<String>, Vec<ImageId>) {
    let mut texts = Vec::with_capacity(records.len());
    let mut answers = Vec::with_capacity(records.len());
    let mut image_ids = Vec::with_capacity(records.len());
    for record in records {
        texts.push(record.text);
        answers.push(record.answer);
        image_ids.push(record.image_id);
    }
    (texts, answers, image_ids)
}

/// Run the whole preparation without touching any cache. Any failing step
/// aborts the run.
pub fn build_bundle<P: DatasetProvider + ?Sized>(provider: &P, config: &PrepareConfig) -> Result<DatasetBundle> {
    let (train_questions, train_answers, train_image_ids) = unzip_questions(provider.questions(Split::Train)?);
    let (test_questions, test_answers, test_image_ids) = unzip_questions(provider.questions(Split::Test)?);
    log::info!(
        "Read {} training questions and {} testing questions.",
        train_questions.len(),
        test_questions.len()
    );

    let answer_vocabulary = AnswerVocabulary::new(provider.answers()?)?;
    let answer_count = answer_vocabulary.len();
    log::info!("Found {} total answers: {:?}", answer_count, answer_vocabulary.answers());

    let train_images = load_image_set(&provider.image_paths(Split::Train)?, &config.image)?;
    let test_images = load_image_set(&provider.image_paths(Split::Test)?, &config.image)?;
    let image_shape = canonical_shape(&train_images, Split::Train)?;
    log::info!(
        "Read {} training images and {} testing images.",
        train_images.len(),
        test_images.len()
    );
    log::info!("Each image has shape {}.", image_shape);

    log::info!("Fitting question tokenizer...");
    let vocabulary = fit_vocabulary(&train_questions, &config.tokenizer);
    let vocab_size = vocabulary.size();
    log::info!("Vocab size: {}", vocab_size);
    log::debug!("Word index: {:?}", vocabulary.iter().collect::<Vec<_>>());

    log::info!("Converting questions to bags of words...");
    let train_question_vectors = vectorize(&train_questions, &vocabulary, &config.tokenizer);
    let test_question_vectors = vectorize(&test_questions, &vocabulary, &config.tokenizer);
    if let Some(example) = train_question_vectors.rows().into_iter().next() {
        log::debug!("Example question bag of words: {}", example);
    }

    log::info!("Creating model input images...");
    let train_images = stack_images(&train_image_ids, &train_images, image_shape, Split::Train)?;
    let test_images = stack_images(&test_image_ids, &test_images, image_shape, Split::Test)?;

    log::info!("Creating model outputs...");
    let train_answer_indices = answer_indices(&train_answers, &answer_vocabulary)?;
    let test_answer_indices = answer_indices(&test_answers, &answer_vocabulary)?;
    let train_outputs = one_hot(&train_answer_indices, answer_count);
    let test_outputs = one_hot(&test_answer_indices, answer_count);
    if let Some(example) = train_outputs.rows().into_iter().next() {
        log::debug!("Example model output: {}", example);
    }

    Ok(DatasetBundle {
        train_images,
        train_question_vectors,
        train_answers: train_outputs,
        test_images,
        test_question_vectors,
        test_answers: test_outputs,
        image_shape,
        vocab_size,
        answer_count,
        answer_vocabulary,
        raw_test_questions: test_questions,
        test_answer_indices,
        vocabulary,
    })
}
