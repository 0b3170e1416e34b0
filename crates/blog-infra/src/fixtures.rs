//! Random blog posts for seeding stores and building request payloads.
//!
//! Used by the integration suites: seed before each test, tear down after.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;
use blog_shared::dto::{AuthorDto, CreatePostRequest};

/// Titles are drawn uniformly from this vocabulary.
pub const TITLES: [&str; 5] = ["adventure", "hiking", "skiing", "travel", "camping"];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Ken", "Linus",
    "Margaret", "Niklaus", "Radia", "Tony",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Dijkstra", "Hamilton", "Hoare", "Hopper", "Knuth", "Liskov", "Lovelace", "Perlman",
    "Ritchie", "Shannon", "Thompson", "Torvalds", "Turing", "Wirth",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "trail", "summit", "river", "forest", "valley",
    "morning", "snow", "campfire", "map", "compass", "ridge", "meadow", "lake", "wind", "path",
];

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn sentence<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(6..=12);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

/// A paragraph of three to six sentences.
pub fn paragraph<R: Rng>(rng: &mut R) -> String {
    let count = rng.gen_range(3..=6);
    (0..count)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn fake_author<R: Rng>(rng: &mut R) -> Author {
    Author::new(pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// Build a random post with the given RNG. No persistence side effects.
pub fn fake_post_with<R: Rng>(rng: &mut R) -> BlogPost {
    let now = Utc::now();
    BlogPost {
        id: Uuid::new_v4(),
        title: pick(rng, &TITLES).to_string(),
        content: paragraph(rng),
        author: fake_author(rng),
        created_at: now,
        updated_at: now,
    }
}

pub fn fake_post() -> BlogPost {
    fake_post_with(&mut rand::thread_rng())
}

/// Random POST /posts payload.
pub fn fake_post_request() -> CreatePostRequest {
    let post = fake_post();
    CreatePostRequest {
        title: post.title,
        content: post.content,
        author: AuthorDto {
            first_name: post.author.first_name,
            last_name: post.author.last_name,
        },
    }
}

/// Insert `count` random posts, returning them in insertion order.
pub async fn seed_posts<R>(repo: &R, count: usize) -> Result<Vec<BlogPost>, RepoError>
where
    R: PostRepository + ?Sized,
{
    tracing::info!(count, "Seeding blog post data");

    let mut seeded = Vec::with_capacity(count);
    for _ in 0..count {
        seeded.push(repo.insert(fake_post()).await?);
    }
    Ok(seeded)
}

/// Drop every post from the store.
pub async fn tear_down<R>(repo: &R) -> Result<u64, RepoError>
where
    R: PostRepository + ?Sized,
{
    let deleted = repo.delete_all().await?;
    tracing::info!(deleted, "Deleted all blog posts");
    Ok(deleted)
}
