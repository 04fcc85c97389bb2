use async_trait::async_trait;
use nutriplan_model::{CalculateResponse, ProfileRequest};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
}

type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn calculate(&self, profile: &ProfileRequest) -> Result<CalculateResponse>;
    async fn download_report(&self, pdf_file: &str) -> Result<Vec<u8>>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path)
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_client_error() {
        Err(Error::RequestError)
    } else if response.status().is_server_error() {
        Err(Error::InternalServerError)
    } else {
        Ok(response)
    }
}

#[async_trait]
impl Client for ClientImpl {
    async fn calculate(&self, profile: &ProfileRequest) -> Result<CalculateResponse> {
        self.client
            .post(self.endpoint("calculate"))
            .json(profile)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(check_status)?
            .json()
            .await
            .map_err(|_| Error::ResponseError)
    }

    async fn download_report(&self, pdf_file: &str) -> Result<Vec<u8>> {
        self.client
            .get(self.endpoint(&format!("pdfs/{}", pdf_file)))
            .send()
            .await
            .map_err(|_| Error::CommunicationError)
            .and_then(check_status)?
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|_| Error::ResponseError)
    }
}
