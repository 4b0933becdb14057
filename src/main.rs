use anyhow::Result;
use clap::{Parser, Subcommand};
use edubridge::store::CommunityStore;
use edubridge::{Config, LearningService, Mode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "edubridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn about a sustainability topic
    Learn {
        /// Topic to learn about
        topic: String,
        /// Learning mode: basic, deep, or action (unknown values mean basic)
        #[arg(short, long)]
        mode: Option<String>,
    },
    /// Take the quiz for a topic
    Quiz {
        /// Topic to be quizzed on
        topic: String,
        /// Comma-separated answer indices (e.g. "1,2,0"); omit to see the questions
        #[arg(short, long)]
        answers: Option<String>,
    },
    /// Show your progress and badges
    Dashboard,
    /// Show today's eco tip
    Tip,
    /// Community bulletin board
    #[command(subcommand)]
    Community(CommunityCommands),
    /// Top learners and contributors
    Leaderboard,
}

#[derive(Subcommand)]
enum CommunityCommands {
    /// List recent posts
    List,
    /// Share a sustainability action
    Post {
        /// Your display name
        author: String,
        /// What you did
        action: String,
    },
    /// Like a post by id
    Like {
        /// Post id
        id: u64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edubridge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Learn { topic, mode } => {
            let mode = mode.map(|m| Mode::parse(&m)).unwrap_or(config.default_mode);
            let mut service = LearningService::new(edubridge::store::ProgressStore::load()?);
            let outcome = service.learn(&config.user_key, &topic, mode);
            service.into_inner().save()?;

            println!("{}", outcome.content);
            println!();
            println!("{}", outcome.action_plan);
            println!();
            println!("Recommended videos:");
            for video in outcome.videos {
                println!("  {} - {}", video.title, video.url);
            }
            println!();
            println!("{}", outcome.daily_tip);
            println!();
            println!(
                "Topics learned: {} (badges: {})",
                outcome.progress.topics_learned,
                badge_list(&outcome.progress)
            );
        }
        Commands::Quiz { topic, answers } => {
            let questions = edubridge::quiz::generate(&topic);
            match answers {
                Some(answers) => {
                    let answers = parse_answers(&answers)?;
                    let mut service =
                        LearningService::new(edubridge::store::ProgressStore::load()?);
                    let grade =
                        service.submit_quiz(&config.user_key, &topic, &questions, &answers);
                    service.into_inner().save()?;

                    println!("Score: {}/{} ({}%)", grade.score, grade.total, grade.percentage);
                    for (i, question) in questions.iter().enumerate() {
                        let answered = answers.get(i).copied();
                        let mark = if answered == Some(question.correct) { "\u{2713}" } else { "\u{2717}" };
                        println!("  {mark} {}", question.prompt);
                        println!("    {}", question.explanation);
                    }
                }
                None => {
                    for (i, question) in questions.iter().enumerate() {
                        println!("{}. {}", i + 1, question.prompt);
                        for (j, option) in question.options.iter().enumerate() {
                            println!("   [{j}] {option}");
                        }
                    }
                    println!();
                    println!("Submit with: edubridge quiz {topic:?} --answers 0,1,2");
                }
            }
        }
        Commands::Dashboard => {
            let service = LearningService::new(edubridge::store::ProgressStore::load()?);
            let record = service.dashboard(&config.user_key);
            println!("Topics learned:    {}", record.topics_learned);
            println!("  SDG 4 (education): {}", record.sdg4_topics);
            println!("  SDG 6 (water):     {}", record.sdg6_topics);
            println!("  SDG 13 (climate):  {}", record.sdg13_topics);
            println!("Quizzes completed: {}", record.quizzes_completed);
            println!("Total score:       {}", record.total_score);
            println!("Badges:            {}", badge_list(&record));
        }
        Commands::Tip => {
            println!("{}", edubridge::content::daily_tip());
        }
        Commands::Community(command) => {
            let mut store = CommunityStore::load()?;
            match command {
                CommunityCommands::List => {
                    for post in store.board.recent(20) {
                        println!("#{} {} ({} likes)", post.id, post.author, post.likes);
                        println!("   {}", post.action);
                    }
                }
                CommunityCommands::Post { author, action } => {
                    let post = store.board.post(&author, &action)?;
                    println!("Shared as post #{}", post.id);
                    store.save()?;
                }
                CommunityCommands::Like { id } => {
                    let likes = store.board.like(id)?;
                    println!("Post #{id} now has {likes} likes");
                    store.save()?;
                }
            }
        }
        Commands::Leaderboard => {
            let progress = edubridge::store::ProgressStore::load()?;
            let community = CommunityStore::load()?;

            println!("Top learners:");
            for (rank, (key, record)) in progress.top_users(10).iter().enumerate() {
                println!(
                    "  {}. {} - {} points, {} topics",
                    rank + 1,
                    key,
                    record.total_score,
                    record.topics_learned
                );
            }
            println!();
            println!("Top contributors:");
            for (rank, contributor) in community.board.top_contributors(10).iter().enumerate() {
                println!(
                    "  {}. {} - {} likes across {} posts",
                    rank + 1,
                    contributor.author,
                    contributor.total_likes,
                    contributor.posts
                );
            }
        }
    }

    Ok(())
}

/// Badges as a comma-separated list of wire ids
fn badge_list(record: &edubridge::ProgressRecord) -> String {
    if record.badges.is_empty() {
        "none yet".to_string()
    } else {
        record.badges.iter().map(|b| b.id()).collect::<Vec<_>>().join(", ")
    }
}

/// Parse "1,2,0" into answer indices
fn parse_answers(s: &str) -> Result<Vec<usize>> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("invalid answer index {:?}", part.trim()))
        })
        .collect()
}
