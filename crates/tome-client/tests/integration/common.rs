use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const PAGE_ONE: &str = r#"<!doctype html>
<html>
  <body>
    <ol class="row">
      <li>
        <article class="product_pod">
          <h3><a title="Test Book" href="../../../test-book_1/index.html">Test Book</a></h3>
          <p class="star-rating Three"></p>
          <div class="product_price">
            <p class="price_color">£20.00</p>
            <p class="instock availability">
              <i class="icon-ok"></i>
              In stock
            </p>
          </div>
        </article>
      </li>
      <li>
        <article class="product_pod">
          <h3><a title="Broken Book" href="../../../broken_2/index.html">Broken Book</a></h3>
          <p class="star-rating Five"></p>
        </article>
      </li>
    </ol>
  </body>
</html>
"#;

pub const PAGE_TWO: &str = r#"<!doctype html>
<html>
  <body>
    <article class="product_pod">
      <h3><a title="Unrated Book" href="../../../unrated_3/index.html">Unrated</a></h3>
      <p class="price_color">£9.99</p>
      <p class="instock availability">In stock</p>
    </article>
  </body>
</html>
"#;

pub const EMPTY_PAGE: &str = "<!doctype html><html><body><p>Nothing here.</p></body></html>";

/// How the server answers once the listed pages run out.
#[derive(Clone, Copy)]
pub enum PastEnd {
    NotFound,
    EmptyPage,
}

/// Serves a two-page catalog under `/catalogue/` on a random local port.
///
/// Returns the catalog base URL, a shutdown sender and the server thread.
pub fn spawn_catalog_server(past_end: PastEnd) -> (String, mpsc::Sender<()>, thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
    let base_url = format!("http://{}/catalogue/", server.server_addr());

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let (status, body) = match (request.url(), past_end) {
                ("/catalogue/page-1.html", _) => (200, PAGE_ONE),
                ("/catalogue/page-2.html", _) => (200, PAGE_TWO),
                (_, PastEnd::EmptyPage) => (200, EMPTY_PAGE),
                (_, PastEnd::NotFound) => (404, "Not Found"),
            };

            let _ = request.respond(tiny_http::Response::from_string(body).with_status_code(status));
        }
    });

    (base_url, shutdown_tx, handle)
}
