use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::answer::Answer;
use crate::model::question::{NewQuestion, QuestionId};
use crate::model::spec::QuestionSpec;
use crate::model::view::QuestionDescription;
use crate::repository::{AnswerRepository, QuestionRepository};

/// The question service: validates incoming specifications and delegates
/// storage to the repositories.
pub struct QuestionService<Q, A> {
    questions: Q,
    answers: A,
}

impl<Q, A> QuestionService<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    pub fn new(questions: Q, answers: A) -> Self {
        Self { questions, answers }
    }

    /// Get the question with this ID, including its answers.
    pub async fn get(&self, id: QuestionId) -> Result<QuestionDescription> {
        let question = self
            .questions
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound(id))?;
        let answers = self.answers.find_by_question(id).await?;
        Ok(QuestionDescription::new(question, answers))
    }

    /// Get every question in insertion order, each with its answers.
    pub async fn get_all(&self) -> Result<Vec<QuestionDescription>> {
        let questions = self.questions.find_all().await?;

        // Group the answers by their owning question in a single pass.
        let mut answers: HashMap<QuestionId, Vec<Answer>> = HashMap::new();
        for answer in self.answers.find_all().await? {
            answers.entry(answer.question_id).or_default().push(answer);
        }

        Ok(questions
            .into_iter()
            .map(|question| {
                let answers = answers.remove(&question.id).unwrap_or_default();
                QuestionDescription::new(question, answers)
            })
            .collect())
    }

    /// Validate and persist a new question together with its answers.
    pub async fn create(&self, spec: QuestionSpec) -> Result<QuestionDescription> {
        // Check text uniqueness.
        if self.questions.find_by_text(&spec.text).await?.is_some() {
            return Err(Error::AlreadyExists(spec.text));
        }
        check_exactly_one_true(&spec)?;

        let QuestionSpec { text, answers } = spec;

        // Create and insert the question.
        let question = self.questions.save(NewQuestion { text }).await?;

        // Create and insert the answers, linked to the new question.
        let answers = answers
            .into_iter()
            .map(|answer| answer.into_answer(question.id))
            .collect();
        let answers = self.answers.save_all(answers).await?;

        Ok(QuestionDescription::new(question, answers))
    }

    /// Validate and replace the stored fields of the question with this ID,
    /// preserving its identity.
    pub async fn update(&self, spec: QuestionSpec, id: QuestionId) -> Result<QuestionDescription> {
        // The question must already exist.
        self.questions
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound(id))?;

        // The new text must not collide with a different question.
        if let Some(existing) = self.questions.find_by_text(&spec.text).await? {
            if existing.id != id {
                return Err(Error::AlreadyExists(spec.text));
            }
        }
        check_exactly_one_true(&spec)?;

        let QuestionSpec { text, answers } = spec;

        // Replace the stored question fields.
        if !self.questions.replace(id, NewQuestion { text }).await? {
            return Err(Error::NotFound(id));
        }

        // Replace the answer set wholesale; the replacements get fresh IDs.
        self.answers.delete_by_question(id).await?;
        let answers = answers
            .into_iter()
            .map(|answer| answer.into_answer(id))
            .collect();
        let answers = self.answers.save_all(answers).await?;

        let question = self
            .questions
            .find_by_id(id)
            .await?
            .ok_or(Error::NotFound(id))?;
        Ok(QuestionDescription::new(question, answers))
    }

    /// Remove the question with this ID, cascading removal to its answers.
    pub async fn delete(&self, id: QuestionId) -> Result<()> {
        if !self.questions.delete_by_id(id).await? {
            return Err(Error::NotFound(id));
        }
        self.answers.delete_by_question(id).await?;
        Ok(())
    }

    /// Bulk-wipe every question and answer.
    pub async fn delete_all(&self) -> Result<()> {
        self.answers.delete_all().await?;
        self.questions.delete_all().await?;
        Ok(())
    }
}

/// A question's answer set must contain exactly one answer marked true.
fn check_exactly_one_true(spec: &QuestionSpec) -> Result<()> {
    match spec.answers.iter().filter(|answer| answer.is_true).count() {
        0 => Err(Error::NoTrueAnswer),
        1 => Ok(()),
        _ => Err(Error::SeveralTrueAnswers),
    }
}
