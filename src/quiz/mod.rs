//! Quiz generation and grading
//!
//! Quizzes come from fixed banks of three multiple-choice questions. Like
//! the plan and video catalogues, bank selection keeps its own bucket
//! order (climate first, with a distinct energy bank) rather than the SDG
//! classifier. Grading compares answered option indices against the stored
//! correct index; both sides are total functions with no failure path.

use serde::Serialize;

/// A multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Question text
    pub prompt: &'static str,
    /// Exactly four answer options
    pub options: [&'static str; 4],
    /// Index into `options` of the correct answer
    pub correct: usize,
    /// Shown after grading
    pub explanation: &'static str,
}

/// Result of grading a quiz submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grade {
    /// Number of correct answers
    pub score: u32,
    /// Number of questions graded
    pub total: u32,
    /// round(100 * score / total); 0 when there were no questions
    pub percentage: u32,
}

const CLIMATE_BANK: [Question; 3] = [
    Question {
        prompt: "What is the primary cause of climate change?",
        options: ["Solar radiation", "Greenhouse gas emissions", "Ocean currents", "Volcanic activity"],
        correct: 1,
        explanation: "Greenhouse gas emissions from human activities are the primary cause of climate change.",
    },
    Question {
        prompt: "Which gas is most responsible for global warming?",
        options: ["Oxygen", "Nitrogen", "Carbon Dioxide", "Argon"],
        correct: 2,
        explanation: "Carbon dioxide (CO2) is the most significant greenhouse gas contributing to global warming.",
    },
    Question {
        prompt: "What is the Paris Agreement target for global temperature rise?",
        options: ["1.5\u{B0}C", "2\u{B0}C", "3\u{B0}C", "4\u{B0}C"],
        correct: 1,
        explanation: "The Paris Agreement aims to limit global temperature rise to well below 2\u{B0}C, preferably 1.5\u{B0}C.",
    },
];

const WATER_BANK: [Question; 3] = [
    Question {
        prompt: "What percentage of Earth's water is freshwater?",
        options: ["1%", "3%", "10%", "25%"],
        correct: 1,
        explanation: "Only about 3% of Earth's water is freshwater, and most of it is frozen in glaciers.",
    },
    Question {
        prompt: "What is the main cause of ocean plastic pollution?",
        options: ["Natural processes", "Single-use plastics", "Fish waste", "Seaweed"],
        correct: 1,
        explanation: "Single-use plastics are the main cause of ocean plastic pollution.",
    },
    Question {
        prompt: "How many people worldwide lack access to clean water?",
        options: ["100 million", "500 million", "1 billion", "2 billion"],
        correct: 3,
        explanation: "Approximately 2 billion people worldwide lack access to clean water.",
    },
];

const ENERGY_BANK: [Question; 3] = [
    Question {
        prompt: "What is the most abundant renewable energy source?",
        options: ["Wind", "Solar", "Hydroelectric", "Geothermal"],
        correct: 1,
        explanation: "Solar energy is the most abundant renewable energy source on Earth.",
    },
    Question {
        prompt: "What percentage of global energy comes from renewables?",
        options: ["10%", "20%", "30%", "50%"],
        correct: 1,
        explanation: "About 20% of global energy comes from renewable sources.",
    },
    Question {
        prompt: "Which renewable energy source is most efficient?",
        options: ["Solar panels", "Wind turbines", "Hydroelectric dams", "Geothermal plants"],
        correct: 2,
        explanation: "Hydroelectric dams are typically the most efficient renewable energy source.",
    },
];

const EDUCATION_BANK: [Question; 3] = [
    Question {
        prompt: "Which SDG calls for inclusive and equitable quality education?",
        options: ["SDG 2", "SDG 4", "SDG 8", "SDG 11"],
        correct: 1,
        explanation: "SDG 4 aims to ensure inclusive and equitable quality education for all.",
    },
    Question {
        prompt: "What does lifelong learning mean?",
        options: [
            "Learning only in school",
            "Ongoing learning throughout life",
            "Learning a single trade",
            "Studying until age 30",
        ],
        correct: 1,
        explanation: "Lifelong learning is the ongoing pursuit of knowledge throughout a person's life.",
    },
    Question {
        prompt: "Why does education matter for sustainability?",
        options: [
            "It raises test scores",
            "It enables informed decisions and critical thinking",
            "It replaces policy",
            "It only benefits teachers",
        ],
        correct: 1,
        explanation: "Education equips people to make informed decisions that support sustainable development.",
    },
];

const GENERAL_BANK: [Question; 3] = [
    Question {
        prompt: "What does SDG stand for?",
        options: [
            "Sustainable Development Goals",
            "Social Development Group",
            "Science Data Group",
            "System Design Goals",
        ],
        correct: 0,
        explanation: "SDG stands for Sustainable Development Goals, set by the United Nations.",
    },
    Question {
        prompt: "How many Sustainable Development Goals are there?",
        options: ["15", "17", "20", "25"],
        correct: 1,
        explanation: "There are 17 Sustainable Development Goals.",
    },
    Question {
        prompt: "What is sustainability?",
        options: [
            "Using all resources",
            "Meeting present needs without compromising future",
            "Growing economy only",
            "Protecting environment only",
        ],
        correct: 1,
        explanation: "Sustainability means meeting present needs without compromising future generations' ability to meet their needs.",
    },
];

/// Generate the three-question quiz for a topic
///
/// Bank order mirrors the plan and video catalogues: climate, water, a
/// distinct energy bank, then education, with a general fallback.
pub fn generate(topic: &str) -> Vec<Question> {
    let topic_lower = topic.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| topic_lower.contains(kw));

    let bank = if contains_any(&["climate", "carbon", "warming", "emission"]) {
        &CLIMATE_BANK
    } else if contains_any(&["water", "ocean", "river", "pollution"]) {
        &WATER_BANK
    } else if contains_any(&["energy", "solar", "wind", "renewable"]) {
        &ENERGY_BANK
    } else if contains_any(&["education", "learning", "school"]) {
        &EDUCATION_BANK
    } else {
        &GENERAL_BANK
    };
    bank.to_vec()
}

/// Grade a quiz submission
///
/// Answer `i` is correct iff it equals `questions[i].correct`. Missing or
/// out-of-range answers count as wrong. An empty quiz grades to all zeros.
pub fn grade(questions: &[Question], answers: &[usize]) -> Grade {
    let total = questions.len() as u32;
    let score = questions
        .iter()
        .zip(answers.iter())
        .filter(|(question, answer)| **answer == question.correct)
        .count() as u32;

    let percentage = if total == 0 {
        0
    } else {
        ((f64::from(score) / f64::from(total)) * 100.0).round() as u32
    };

    Grade { score, total, percentage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_topic_gets_exactly_three_questions() {
        for topic in ["climate change", "clean water", "school funding", "gardening"] {
            assert_eq!(generate(topic).len(), 3, "topic: {topic}");
        }
    }

    #[test]
    fn each_bucket_selects_its_own_bank() {
        assert_eq!(generate("Climate Change")[0].prompt, CLIMATE_BANK[0].prompt);
        assert_eq!(generate("ocean pollution")[0].prompt, WATER_BANK[0].prompt);
        assert_eq!(generate("remote learning")[0].prompt, EDUCATION_BANK[0].prompt);
        assert_eq!(generate("gardening")[0].prompt, GENERAL_BANK[0].prompt);
    }

    #[test]
    fn energy_topics_get_the_energy_bank() {
        let questions = generate("solar panels");
        assert_eq!(questions[0].prompt, "What is the most abundant renewable energy source?");
        assert_eq!(generate("wind power")[0].prompt, ENERGY_BANK[0].prompt);
        // The climate bucket is checked first, so mixed topics stay climate.
        assert_eq!(generate("carbon-free energy")[0].prompt, CLIMATE_BANK[0].prompt);
    }

    #[test]
    fn correct_indices_are_in_range() {
        for bank in [&CLIMATE_BANK, &WATER_BANK, &ENERGY_BANK, &EDUCATION_BANK, &GENERAL_BANK] {
            for question in bank {
                assert!(question.correct < question.options.len());
            }
        }
    }

    #[test]
    fn empty_quiz_grades_to_zero() {
        assert_eq!(grade(&[], &[]), Grade { score: 0, total: 0, percentage: 0 });
    }

    #[test]
    fn two_of_three_rounds_to_67() {
        let questions = generate("climate change");
        let mut answers: Vec<usize> = questions.iter().map(|q| q.correct).collect();
        answers[2] = (questions[2].correct + 1) % 4;

        let grade = grade(&questions, &answers);
        assert_eq!(grade.score, 2);
        assert_eq!(grade.total, 3);
        assert_eq!(grade.percentage, 67);
    }

    #[test]
    fn all_correct_is_100_percent() {
        let questions = generate("water");
        let answers: Vec<usize> = questions.iter().map(|q| q.correct).collect();
        assert_eq!(grade(&questions, &answers).percentage, 100);
    }

    #[test]
    fn missing_answers_count_as_wrong() {
        let questions = generate("water");
        let answers = vec![questions[0].correct];
        let result = grade(&questions, &answers);
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 3);
    }

    proptest! {
        #[test]
        fn percentage_never_exceeds_100(answers in proptest::collection::vec(0usize..4, 0..6)) {
            let questions = generate("climate change");
            let result = grade(&questions, &answers);
            prop_assert!(result.percentage <= 100);
            prop_assert!(result.score <= result.total);
        }
    }
}
