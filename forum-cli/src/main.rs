use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forum_client::{ForumClient, ForumClientError, Identity, Post, User};

const SESSION_FILE: &str = ".forum_session";
const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "forum-cli", version, about = "CLI client for forum-server")]
struct Cli {
    /// Server address.
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Get a fresh 10-digit identity. Write the id down: it is the only key.
    Register {
        #[arg(long)]
        username: String,
    },
    /// Log in with an existing id (or invent one, 10 digits).
    Login {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        username: String,
    },
    /// Show the profile behind the saved identity.
    Whoami,
    /// List recent posts, newest first.
    List,
    /// Create a post (requires a saved identity).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Reply to a post (requires a saved identity).
    Reply {
        #[arg(long)]
        post_id: String,
        #[arg(long)]
        content: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = normalize_server(cli.server.unwrap_or_else(|| DEFAULT_SERVER.to_string()));
    let mut client = ForumClient::new(server);

    if let Some(identity) = load_session().context("failed to read .forum_session")? {
        client.set_identity(identity);
    }

    match cli.command {
        Command::Register { username } => {
            let identity = client
                .register(&username)
                .await
                .map_err(map_client_error)?;
            persist_session(&client).context("failed to save session")?;
            print_identity("Registered", &identity);
        }
        Command::Login { user_id, username } => {
            let identity = client
                .login(&user_id, &username)
                .await
                .map_err(map_client_error)?;
            persist_session(&client).context("failed to save session")?;
            print_identity("Logged in", &identity);
        }
        Command::Whoami => {
            let identity = client
                .identity()
                .ok_or_else(|| anyhow::anyhow!("no saved identity: run `forum-cli register` or `forum-cli login`"))?
                .clone();
            let user = client
                .fetch_user(&identity.user_id)
                .await
                .map_err(map_client_error)?;
            print_user(&user);
        }
        Command::List => {
            let posts = client.list_posts().await.map_err(map_client_error)?;
            print_list(&posts);
        }
        Command::Create { title, content } => {
            let post = client
                .create_post(&title, &content)
                .await
                .map_err(map_client_error)?;
            print_post("Post created", &post);
        }
        Command::Reply { post_id, content } => {
            let reply = client
                .add_reply(&post_id, &content)
                .await
                .map_err(map_client_error)?;
            println!("Reply added: id={} post={post_id}", reply.id);
        }
    }

    Ok(())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_session_content(raw: &str) -> Option<Identity> {
    serde_json::from_str(raw).ok()
}

fn load_session() -> io::Result<Option<Identity>> {
    if !Path::new(SESSION_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(SESSION_FILE)?;
    Ok(parse_session_content(&raw))
}

fn persist_session(client: &ForumClient) -> Result<()> {
    if let Some(identity) = client.identity() {
        let raw = serde_json::to_string_pretty(identity)?;
        fs::write(SESSION_FILE, raw)?;
    }
    Ok(())
}

fn map_client_error(err: ForumClientError) -> anyhow::Error {
    let message = match err {
        ForumClientError::NoIdentity => {
            "identity required: run `forum-cli login ...` or `forum-cli register ...`".to_string()
        }
        ForumClientError::NotFound => "resource not found".to_string(),
        ForumClientError::InvalidRequest(message) => format!("invalid request: {message}"),
        ForumClientError::Http(err) => format!("http error: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_identity(title: &str, identity: &Identity) {
    println!("{title}");
    println!("  userId: {}", identity.user_id);
    println!("  username: {}", identity.username);
}

fn print_user(user: &User) {
    println!("userId: {}", user.user_id);
    println!("username: {}", user.username);
    println!("createdAt: {}", user.created_at);
    println!("lastLogin: {}", user.last_login);
}

fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("title: {}", post.title);
    println!("content: {}", post.content);
    println!("author: {} ({})", post.username, post.author_id);
    println!("createdAt: {}", post.created_at);
}

fn print_list(posts: &[Post]) {
    println!("Posts: {}", posts.len());

    for post in posts {
        println!(
            "- [{}] {} by {} ({} replies)",
            post.id,
            post.title,
            post.username,
            post.replies.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8080".to_string());
        assert_eq!(s, "https://example.com:8080");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:8080".to_string());
        assert_eq!(s, "http://127.0.0.1:8080");
    }

    #[test]
    fn parse_session_content_reads_identity() {
        let identity =
            parse_session_content(r#"{"user_id":"0123456789","username":"visitor"}"#)
                .expect("session must parse");
        assert_eq!(identity.user_id, "0123456789");
        assert_eq!(identity.username, "visitor");
    }

    #[test]
    fn parse_session_content_rejects_garbage() {
        assert!(parse_session_content("not json").is_none());
        assert!(parse_session_content("").is_none());
    }
}
