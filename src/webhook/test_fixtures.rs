//! Local TCP servers for exercising the reqwest transport.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Reads one HTTP request (headers plus `Content-Length` body) from the stream.
async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return buf;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    buf
}

async fn bind() -> (TcpListener, url::Url) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = url::Url::parse(&format!("http://{addr}/incoming/hook")).unwrap();
    (listener, url)
}

/// Serves a single connection: reads the request, writes `reply` verbatim, closes.
pub async fn raw_reply_server(reply: &'static [u8]) -> url::Url {
    let (listener, url) = bind().await;
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        stream.write_all(reply).await.unwrap();
        stream.shutdown().await.ok();
    });
    url
}

/// Accepts a connection, reads the request and never answers.
pub async fn silent_server() -> url::Url {
    let (listener, url) = bind().await;
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        std::future::pending::<()>().await;
        drop(stream);
    });
    url
}

/// Transport with proxies disabled so requests reach the local server.
pub fn direct_client() -> super::ReqwestClient {
    super::ReqwestClient::from_client(reqwest::Client::builder().no_proxy().build().unwrap())
}
