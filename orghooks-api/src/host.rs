use url::Url;

pub const DEFAULT_HOST: &str = "github.com";

const PUBLIC_API: &str = "https://api.github.com/";

pub fn is_public<H>(host: H) -> bool
where
    H: AsRef<str>
{
    let host_ref = host.as_ref().trim();

    host_ref.eq_ignore_ascii_case(DEFAULT_HOST) ||
        host_ref.eq_ignore_ascii_case("api.github.com")
}

/// enterprise servers have the api under `/api/v3/`, a value with a scheme
/// is used as is
pub fn api_url<H>(host: H) -> Result<Url, url::ParseError>
where
    H: AsRef<str>
{
    let host_ref = host.as_ref().trim();

    if host_ref.is_empty() {
        return Err(url::ParseError::EmptyHost);
    }

    if is_public(host_ref) {
        return Url::parse(PUBLIC_API);
    }

    let mut url = if host_ref.starts_with("https://") || host_ref.starts_with("http://") {
        Url::parse(host_ref)?
    } else {
        Url::parse(&format!("https://{}/api/v3/", host_ref))?
    };

    if url.host().is_none() {
        return Err(url::ParseError::EmptyHost);
    }

    // joins drop the last segment without a trailing slash
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

/// github logins are ascii alphanumerics and `-`, managed enterprise logins
/// add `_`. anything else could change the path once joined to the base url.
pub fn valid_organization<O>(organization: O) -> bool
where
    O: AsRef<str>
{
    let org_ref = organization.as_ref();

    !org_ref.is_empty() && org_ref.chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

pub fn hooks_path<O>(organization: O) -> String
where
    O: AsRef<str>
{
    format!("orgs/{}/hooks", organization.as_ref())
}
