//! Curated video recommendations per topic
//!
//! The video catalogue keeps a separate energy collection, so selection
//! uses its own bucket order (climate, water, energy, education, default)
//! rather than the SDG classifier.

use serde::Serialize;

/// A recommended video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoLink {
    /// Display title
    pub title: &'static str,
    /// Watch URL
    pub url: &'static str,
}

const CLIMATE_VIDEOS: [VideoLink; 3] = [
    VideoLink {
        title: "Climate Change Explained in 5 Minutes",
        url: "https://www.youtube.com/watch?v=G4H1N_yXBiA",
    },
    VideoLink {
        title: "The Science of Climate Change",
        url: "https://www.youtube.com/watch?v=EtW2rrLHs08",
    },
    VideoLink {
        title: "How to Fight Climate Change",
        url: "https://www.youtube.com/watch?v=0kL2hJ3n7sk",
    },
];

const WATER_VIDEOS: [VideoLink; 3] = [
    VideoLink {
        title: "Water Pollution: Causes and Solutions",
        url: "https://www.youtube.com/watch?v=Om42Lppkd9w",
    },
    VideoLink {
        title: "Ocean Plastic Pollution Explained",
        url: "https://www.youtube.com/watch?v=HQTUWK7CM-Y",
    },
    VideoLink {
        title: "How to Save Water at Home",
        url: "https://www.youtube.com/watch?v=U6WqJ2Qj4cQ",
    },
];

const ENERGY_VIDEOS: [VideoLink; 3] = [
    VideoLink {
        title: "Renewable Energy Explained",
        url: "https://www.youtube.com/watch?v=1kUE0BZtTRc",
    },
    VideoLink {
        title: "Solar Power: How It Works",
        url: "https://www.youtube.com/watch?v=xKxrkht7CpY",
    },
    VideoLink {
        title: "Wind Energy: The Future of Power",
        url: "https://www.youtube.com/watch?v=QpViwKIwskE",
    },
];

const EDUCATION_VIDEOS: [VideoLink; 3] = [
    VideoLink {
        title: "The Future of Education",
        url: "https://www.youtube.com/watch?v=GEmuEWjHr5c",
    },
    VideoLink {
        title: "Sustainable Development Goals Explained",
        url: "https://www.youtube.com/watch?v=0XTBYMfZyrM",
    },
    VideoLink {
        title: "Environmental Education for Kids",
        url: "https://www.youtube.com/watch?v=WfGMYdalClU",
    },
];

const DEFAULT_VIDEOS: [VideoLink; 3] = [
    VideoLink {
        title: "Sustainability: What It Means",
        url: "https://www.youtube.com/watch?v=zx04Kl8y4dE",
    },
    VideoLink {
        title: "How to Live More Sustainably",
        url: "https://www.youtube.com/watch?v=V0lQ3ljjl40",
    },
    VideoLink {
        title: "Environmental Protection Tips",
        url: "https://www.youtube.com/watch?v=WmVLcj-XKnM",
    },
];

/// Select the three recommended videos for a topic
pub fn video_links(topic: &str) -> &'static [VideoLink; 3] {
    let topic_lower = topic.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| topic_lower.contains(kw));

    if contains_any(&["climate", "carbon", "warming", "emission"]) {
        &CLIMATE_VIDEOS
    } else if contains_any(&["water", "ocean", "river", "pollution"]) {
        &WATER_VIDEOS
    } else if contains_any(&["energy", "solar", "wind", "renewable"]) {
        &ENERGY_VIDEOS
    } else if contains_any(&["education", "learning", "school"]) {
        &EDUCATION_VIDEOS
    } else {
        &DEFAULT_VIDEOS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_topics_get_climate_videos() {
        let videos = video_links("carbon emissions");
        assert_eq!(videos[0].title, "Climate Change Explained in 5 Minutes");
    }

    #[test]
    fn energy_collection_is_distinct_from_climate() {
        assert_ne!(video_links("solar power"), video_links("carbon tax"));
    }

    #[test]
    fn unmatched_topics_get_default_videos() {
        let videos = video_links("composting");
        assert_eq!(videos[0].title, "Sustainability: What It Means");
    }

    #[test]
    fn always_three_videos_with_urls() {
        for video in video_links("anything at all") {
            assert!(video.url.starts_with("https://"));
        }
    }
}
