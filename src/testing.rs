//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical course fixtures so every test suite talks
//! about the same small plain-language course.

#![doc(hidden)]

use crate::course::Course;
use crate::types::CourseIndex;

/// The canonical fixture: a small plain-language writing course with an
/// introduction, an objectives blurb, voice guidance, a familiar-words
/// lesson, and one knowledge check.
pub fn sample_course() -> Course {
    serde_json::from_str(SAMPLE_COURSE_JSON).expect("sample course fixture parses")
}

/// The canonical fixture, already indexed.
pub fn built_index() -> CourseIndex {
    CourseIndex::build(&sample_course())
}

/// Parse an ad-hoc course literal inside a test.
pub fn course_from_json(json: &str) -> Course {
    serde_json::from_str(json).expect("course literal parses")
}

pub const SAMPLE_COURSE_JSON: &str = r#"{
  "lessons": [
    {
      "id": "l-intro",
      "title": "Introduction to Plain Language",
      "items": [
        {
          "id": "b-intro",
          "type": "text",
          "heading": "Introduction",
          "paragraph": "<p>Plain language is writing that your readers understand the first time they read it. It uses familiar words and short sentences.</p>"
        },
        {
          "id": "b-objectives",
          "type": "text",
          "paragraph": "At the end of the course, you will: Recognise inclusive terms. Apply plain language. Use short sentences."
        }
      ]
    },
    {
      "id": "l-principles",
      "title": "Key Principles",
      "items": [
        {
          "id": "b-principles",
          "type": "text",
          "paragraph": "The key principles of plain language are: Short SentencesActive VoiceFamiliar Words"
        }
      ]
    },
    {
      "id": "l-voice",
      "title": "Active and Passive Voice",
      "items": [
        {
          "id": "b-voice",
          "type": "text",
          "heading": "Voice",
          "paragraph": "Active voice makes your writing direct and lively. Passive voice hides who is doing the work.",
          "items": [
            {
              "id": "b-voice-caption",
              "caption": "A before-and-after rewrite from passive to active voice"
            }
          ]
        }
      ]
    },
    {
      "id": "l-familiar",
      "title": "Familiar Words",
      "items": [
        {
          "id": "b-familiar",
          "type": "text",
          "paragraph": "Familiar words are words your readers use every day. Avoid jargon such as synergy and utilize. Raining cats and dogs is an idiom to avoid."
        },
        {
          "id": "b-carousel",
          "slides": [
            {
              "description": "Swap utilize for use and commence for start."
            },
            {
              "description": "Idioms travel badly between cultures."
            }
          ]
        }
      ]
    },
    {
      "id": "l-quiz",
      "title": "Knowledge Check",
      "items": [
        {
          "id": "b-quiz",
          "type": "knowledgeCheck",
          "title": "Which phrase is plainer?",
          "answers": [
            { "title": "Utilize synergies going forward", "correct": false },
            { "title": "Work together from now on", "correct": true }
          ]
        }
      ]
    }
  ]
}"#;
