use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow};
use birlik_client::{
    BirlikClient, BirlikClientError, ContactMessage, CurrentUser, Member, MemberDocument,
    MemberListQuery, News, NewsInput, PageQuery, Paginated, ReviewDocumentInput,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

const TOKEN_FILE: &str = ".birlik_token";
const DEFAULT_SERVER: &str = "http://127.0.0.1:4000";

#[derive(Debug, Parser)]
#[command(name = "birlik-cli", version, about = "CLI клиент для API портала Birlik")]
struct Cli {
    /// Адрес сервера (иначе переменная BIRLIK_API_URL или значение по умолчанию).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Вход (токен сохраняется в .birlik_token).
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Текущая учётная запись.
    Me,
    /// Выход (удаление сохранённого токена).
    Logout,
    /// Новости.
    News {
        #[command(subcommand)]
        command: NewsCommand,
    },
    /// Участники (требует права администратора).
    Members {
        #[command(subcommand)]
        command: MembersCommand,
    },
    /// Документы участников (требует права администратора).
    Docs {
        #[command(subcommand)]
        command: DocsCommand,
    },
    /// Сообщения обратной связи (требует права администратора).
    Contact {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Настройки сайта.
    Settings,
}

#[derive(Debug, Subcommand)]
enum NewsCommand {
    /// Список новостей.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Административный список, включая неопубликованные (требует токен).
        #[arg(long)]
        all: bool,
    },
    /// Новость по id.
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Создание новости (требует токен).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        published: bool,
    },
    /// Полное обновление новости (требует токен).
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        published: bool,
    },
    /// Удаление новости (требует токен).
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum MembersCommand {
    /// Список участников.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        company: Option<String>,
    },
    /// Одобрение заявки участника.
    Approve {
        #[arg(long)]
        id: i64,
    },
    /// Отклонение заявки участника.
    Reject {
        #[arg(long)]
        id: i64,
    },
    /// Принудительная установка пароля участника.
    SetPassword {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        password: String,
    },
    /// Удаление участника.
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum DocsCommand {
    /// Документы участника.
    List {
        #[arg(long)]
        member: i64,
    },
    /// Решение по документу.
    Review {
        #[arg(long)]
        id: i64,
        /// Новый статус: approved или rejected.
        #[arg(long)]
        status: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Запрос повторной загрузки документа.
    Resubmit {
        #[arg(long)]
        id: i64,
    },
    /// Скачивание файла документа.
    Download {
        #[arg(long)]
        id: i64,
        /// Путь для сохранения (иначе имя из Content-Disposition).
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging("warn")?;

    let cli = Cli::parse();
    let server = resolve_server(cli.server, std::env::var("BIRLIK_API_URL").ok());
    let mut client = BirlikClient::new(server);

    if let Some(token) = load_token().context("не удалось прочитать .birlik_token")? {
        client.set_token(token);
    }

    match cli.command {
        Command::Login { email, password } => {
            let auth = client
                .login(&email, &password)
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("не удалось сохранить токен")?;
            println!("Вход выполнен: {} ({})", auth.user.email, auth.user.role);
        }
        Command::Me => {
            let me = client.me().await.map_err(map_client_error)?;
            print_me(&me);
        }
        Command::Logout => {
            if Path::new(TOKEN_FILE).exists() {
                fs::remove_file(TOKEN_FILE).context("не удалось удалить .birlik_token")?;
            }
            println!("Токен удалён");
        }
        Command::News { command } => run_news(&client, command).await?,
        Command::Members { command } => run_members(&client, command).await?,
        Command::Docs { command } => run_docs(&client, command).await?,
        Command::Contact { page, limit } => {
            let query = PageQuery {
                page: Some(page),
                limit: Some(limit),
            };
            let list = client
                .list_contact_messages(&query)
                .await
                .map_err(map_client_error)?;
            print_page_header("Сообщений", &list);
            for message in &list.items {
                print_contact(message);
            }
        }
        Command::Settings => {
            let settings = client.site_settings().await.map_err(map_client_error)?;
            println!("Настройки сайта:");
            println!("  phone: {}", settings.phone.as_deref().unwrap_or("-"));
            println!("  email: {}", settings.email.as_deref().unwrap_or("-"));
            println!("  address: {}", settings.address.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}

async fn run_news(client: &BirlikClient, command: NewsCommand) -> Result<()> {
    match command {
        NewsCommand::List { page, limit, all } => {
            let query = PageQuery {
                page: Some(page),
                limit: Some(limit),
            };
            let list = if all {
                client.admin_list_news(&query).await
            } else {
                client.list_news(&query).await
            }
            .map_err(map_client_error)?;

            print_page_header("Новостей", &list);
            for news in &list.items {
                println!(
                    "- [{}] {}{}",
                    news.id,
                    news.title,
                    if news.published { "" } else { " (черновик)" }
                );
            }
        }
        NewsCommand::Get { id } => {
            let news = client.get_news(id).await.map_err(map_client_error)?;
            print_news("Новость", &news);
        }
        NewsCommand::Create {
            title,
            content,
            image_url,
            published,
        } => {
            let input = NewsInput {
                title,
                content,
                image_url,
                published,
            };
            let news = client.create_news(&input).await.map_err(map_client_error)?;
            print_news("Новость создана", &news);
        }
        NewsCommand::Update {
            id,
            title,
            content,
            image_url,
            published,
        } => {
            let input = NewsInput {
                title,
                content,
                image_url,
                published,
            };
            let news = client
                .update_news(id, &input)
                .await
                .map_err(map_client_error)?;
            print_news("Новость обновлена", &news);
        }
        NewsCommand::Delete { id } => {
            client.delete_news(id).await.map_err(map_client_error)?;
            println!("Новость удалена: id={id}");
        }
    }

    Ok(())
}

async fn run_members(client: &BirlikClient, command: MembersCommand) -> Result<()> {
    match command {
        MembersCommand::List {
            page,
            limit,
            search,
            company,
        } => {
            let query = MemberListQuery {
                page: Some(page),
                limit: Some(limit),
                search,
                company,
            };
            let list = client.list_members(&query).await.map_err(map_client_error)?;
            print_page_header("Участников", &list);
            for member in &list.items {
                print_member(member);
            }
        }
        MembersCommand::Approve { id } => {
            let member = client.approve_member(id).await.map_err(map_client_error)?;
            println!("Заявка одобрена: {} (id={})", member.full_name, member.id);
        }
        MembersCommand::Reject { id } => {
            let member = client.reject_member(id).await.map_err(map_client_error)?;
            println!("Заявка отклонена: {} (id={})", member.full_name, member.id);
        }
        MembersCommand::SetPassword { id, password } => {
            client
                .set_member_password(id, &password)
                .await
                .map_err(map_client_error)?;
            println!("Пароль обновлён: id={id}");
        }
        MembersCommand::Delete { id } => {
            client.delete_member(id).await.map_err(map_client_error)?;
            println!("Участник удалён: id={id}");
        }
    }

    Ok(())
}

async fn run_docs(client: &BirlikClient, command: DocsCommand) -> Result<()> {
    match command {
        DocsCommand::List { member } => {
            let documents = client
                .member_documents(member)
                .await
                .map_err(map_client_error)?;
            println!("Документов: {}", documents.len());
            for document in &documents {
                print_document(document);
            }
        }
        DocsCommand::Review { id, status, note } => {
            let input = ReviewDocumentInput {
                status,
                review_note: note,
            };
            let document = client
                .review_document(id, &input)
                .await
                .map_err(map_client_error)?;
            println!("Решение сохранено: id={} status={}", document.id, document.status);
        }
        DocsCommand::Resubmit { id } => {
            let document = client
                .request_document_resubmission(id)
                .await
                .map_err(map_client_error)?;
            println!(
                "Запрошена повторная загрузка: id={} status={}",
                document.id, document.status
            );
        }
        DocsCommand::Download { id, out } => {
            let download = client
                .download_document(id)
                .await
                .map_err(map_client_error)?;
            let path = out.unwrap_or_else(|| PathBuf::from(&download.filename));
            fs::write(&path, &download.bytes)
                .with_context(|| format!("не удалось записать файл {}", path.display()))?;
            println!(
                "Файл сохранён: {} ({} байт, {})",
                path.display(),
                download.bytes.len(),
                download.mime_type
            );
        }
    }

    Ok(())
}

fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

fn resolve_server(flag: Option<String>, env: Option<String>) -> String {
    let raw = flag
        .or(env)
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_token_content(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_token() -> io::Result<Option<String>> {
    if !Path::new(TOKEN_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(TOKEN_FILE)?;
    Ok(parse_token_content(&raw))
}

fn persist_token(client: &BirlikClient) -> io::Result<()> {
    if let Some(token) = client.get_token() {
        fs::write(TOKEN_FILE, token)?;
    }
    Ok(())
}

fn map_client_error(err: BirlikClientError) -> anyhow::Error {
    let message = match err {
        BirlikClientError::MissingToken | BirlikClientError::Unauthorized(_) => {
            "требуется авторизация: выполните `birlik-cli login --email ... --password ...`"
                .to_string()
        }
        BirlikClientError::NotFound(message) => format!("не найдено: {message}"),
        BirlikClientError::Api { status, message } => {
            format!("ошибка API (HTTP {status}): {message}")
        }
        BirlikClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_me(me: &CurrentUser) {
    println!("Учётная запись:");
    println!("  id: {}", me.user.id);
    println!("  email: {}", me.user.email);
    println!("  role: {}", me.user.role);
    if let Some(member) = &me.member {
        println!("Профиль участника:");
        println!("  id: {}", member.id);
        println!("  full_name: {}", member.full_name);
        println!("  approved: {}", member.approved);
    }
}

fn print_news(title: &str, news: &News) {
    println!("{title}");
    println!("id: {}", news.id);
    println!("title: {}", news.title);
    println!("published: {}", news.published);
    println!("created_at: {}", news.created_at);
}

fn print_member(member: &Member) {
    println!(
        "- [{}] {} ({}){}",
        member.id,
        member.full_name,
        member.company.as_deref().unwrap_or("-"),
        if member.approved { "" } else { " — ожидает одобрения" }
    );
}

fn print_document(document: &MemberDocument) {
    println!(
        "- [{}] {} {} ({})",
        document.id, document.kind, document.filename, document.status
    );
}

fn print_contact(message: &ContactMessage) {
    println!(
        "- [{}] {} <{}>: {}",
        message.id, message.name, message.email, message.message
    );
}

fn print_page_header<T>(noun: &str, list: &Paginated<T>) {
    println!(
        "{noun}: {} (page={}/{}, total={})",
        list.items.len(),
        list.page,
        list.total_pages,
        list.total
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://birlik.example.com".to_string());
        assert_eq!(s, "https://birlik.example.com");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:4000".to_string());
        assert_eq!(s, "http://127.0.0.1:4000");
    }

    #[test]
    fn resolve_server_prefers_flag_over_env() {
        let s = resolve_server(
            Some("localhost:9999".to_string()),
            Some("http://env.example.com".to_string()),
        );
        assert_eq!(s, "http://localhost:9999");
    }

    #[test]
    fn resolve_server_falls_back_to_env_then_default() {
        let s = resolve_server(None, Some("env.example.com".to_string()));
        assert_eq!(s, "http://env.example.com");

        let s = resolve_server(None, None);
        assert_eq!(s, DEFAULT_SERVER);
    }

    #[test]
    fn parse_token_content_trims_whitespace() {
        let token = parse_token_content("  abc.def.ghi  ");
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn parse_token_content_rejects_blank() {
        assert!(parse_token_content("   ").is_none());
    }
}
