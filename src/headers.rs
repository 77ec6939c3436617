use ureq::Request;

pub trait SetDefaultHeaders {
    fn set_default_headers(self) -> Request;
}

pub trait SetTokenCookie {
    fn set_token_cookie(self, notion_token: Option<&str>) -> Request;
}

impl SetDefaultHeaders for Request {
    fn set_default_headers(self) -> Request {
        self.set("content-type", "application/json")
    }
}

impl SetTokenCookie for Request {
    fn set_token_cookie(self, notion_token: Option<&str>) -> Request {
        match notion_token {
            Some(token) if !token.is_empty() => {
                self.set("cookie", &format!("token_v2={}", token))
            }
            _ => self,
        }
    }
}
