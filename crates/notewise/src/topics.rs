use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub title: String,
    pub description: String,
}

impl Topic {
    pub fn new<S: Into<String>, T: Into<String>>(title: S, description: T) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Used for any id the lookup does not know
    pub fn generic() -> Self {
        Self::new(
            "Knowledge point",
            "Details of the related knowledge point",
        )
    }
}

/// Read-only source of knowledge point titles and descriptions
pub trait TopicLookup: Send + Sync {
    fn lookup(&self, id: &str) -> Option<Topic>;

    /// Like [`lookup`](Self::lookup), but unknown ids resolve to [`Topic::generic`]
    fn resolve(&self, id: &str) -> Topic {
        self.lookup(id).unwrap_or_else(Topic::generic)
    }
}

lazy_static! {
    static ref BUILTIN_TOPICS: HashMap<&'static str, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        m.insert("kp-001", ("Linear algebra basics", "Matrix operations and vector spaces"));
        m.insert("kp-002", ("Introduction to machine learning", "Principles of supervised and unsupervised learning"));
        m.insert("kp-p001", ("Advanced mathematics", "Calculus and mathematical analysis"));
        m.insert("kp-p002", ("Probability theory", "Probability distributions and statistical inference"));
        m.insert("kp-p003", ("Statistics", "Descriptive statistics and hypothesis testing"));
        m.insert("kp-p004", ("Python programming", "Python syntax and common libraries"));
        m.insert("kp-p005", ("Data structures", "Arrays, linked lists, trees and other data structures"));
        m.insert("kp-n001", ("Deep learning", "Neural networks and backpropagation"));
        m.insert("kp-n002", ("Natural language processing", "Text processing and language models"));
        m.insert("kp-n003", ("Computer vision", "Image recognition and object detection"));
        m.insert("kp-n004", ("Reinforcement learning", "Q-learning and policy gradient methods"));
        m.insert("kp-n005", ("Model optimization", "Hyperparameter tuning and model compression"));
        m
    };
}

/// The built-in topic table
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticTopics;

impl TopicLookup for StaticTopics {
    fn lookup(&self, id: &str) -> Option<Topic> {
        BUILTIN_TOPICS
            .get(id)
            .map(|(title, description)| Topic::new(*title, *description))
    }
}
