//! WHOIS server selection and per-server query syntax.
//!
//! Fills in the `host` and `body` of a [`Request`] for callers that only have
//! a query string.

use std::collections::HashMap;
use std::net::IpAddr;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Result, SleuthError};
use crate::fetch::Request;

/// Answers for any TLD and refers to the registry's own server.
pub const IANA_WHOIS: &str = "whois.iana.org";
/// Starting point for IP address queries.
pub const ARIN_WHOIS: &str = "whois.arin.net";

static WHOIS_SERVERS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Generic TLDs
    m.insert("com", "whois.verisign-grs.com");
    m.insert("net", "whois.verisign-grs.com");
    m.insert("org", "whois.pir.org");
    m.insert("info", "whois.afilias.net");
    m.insert("biz", "whois.biz");
    m.insert("name", "whois.nic.name");
    m.insert("mobi", "whois.afilias.net");
    m.insert("pro", "whois.registrypro.pro");
    m.insert("aero", "whois.aero");
    m.insert("asia", "whois.nic.asia");
    m.insert("coop", "whois.nic.coop");
    m.insert("edu", "whois.educause.edu");
    m.insert("gov", "whois.dotgov.gov");
    m.insert("int", "whois.iana.org");
    m.insert("museum", "whois.museum");
    m.insert("tel", "whois.nic.tel");
    m.insert("travel", "whois.nic.travel");

    // New gTLDs
    m.insert("app", "whois.nic.google");
    m.insert("dev", "whois.nic.google");
    m.insert("page", "whois.nic.google");
    m.insert("blog", "whois.nic.blog");
    m.insert("cloud", "whois.nic.cloud");
    m.insert("xyz", "whois.nic.xyz");
    m.insert("online", "whois.nic.online");
    m.insert("site", "whois.nic.site");
    m.insert("tech", "whois.nic.tech");
    m.insert("store", "whois.nic.store");
    m.insert("shop", "whois.nic.shop");

    // Country codes
    m.insert("ai", "whois.nic.ai");
    m.insert("at", "whois.nic.at");
    m.insert("au", "whois.auda.org.au");
    m.insert("be", "whois.dns.be");
    m.insert("br", "whois.registro.br");
    m.insert("ca", "whois.cira.ca");
    m.insert("cc", "ccwhois.verisign-grs.com");
    m.insert("ch", "whois.nic.ch");
    m.insert("cn", "whois.cnnic.cn");
    m.insert("co", "whois.nic.co");
    m.insert("de", "whois.denic.de");
    m.insert("dk", "whois.punktum.dk");
    m.insert("es", "whois.nic.es");
    m.insert("eu", "whois.eu");
    m.insert("fi", "whois.fi");
    m.insert("fr", "whois.nic.fr");
    m.insert("gg", "whois.gg");
    m.insert("io", "whois.nic.io");
    m.insert("it", "whois.nic.it");
    m.insert("jp", "whois.jprs.jp");
    m.insert("kr", "whois.kr");
    m.insert("me", "whois.nic.me");
    m.insert("nl", "whois.domain-registry.nl");
    m.insert("no", "whois.norid.no");
    m.insert("nz", "whois.irs.net.nz");
    m.insert("pl", "whois.dns.pl");
    m.insert("ru", "whois.tcinet.ru");
    m.insert("se", "whois.iis.se");
    m.insert("tv", "tvwhois.verisign-grs.com");
    m.insert("uk", "whois.nic.uk");
    m.insert("us", "whois.nic.us");

    m
});

pub fn get_whois_server(tld: &str) -> Option<&'static str> {
    WHOIS_SERVERS.get(tld.to_lowercase().as_str()).copied()
}

pub fn get_tld(domain: &str) -> Option<&str> {
    domain
        .trim_end_matches('.')
        .rsplit('.')
        .next()
        .filter(|tld| !tld.is_empty())
}

/// Server to ask about `query`: ARIN for IP addresses, the TLD's registry for
/// domains, IANA when the TLD is unknown.
pub fn whois_server_for(query: &str) -> &'static str {
    let query = query.trim();
    if query.parse::<IpAddr>().is_ok() {
        return ARIN_WHOIS;
    }

    get_tld(query)
        .and_then(get_whois_server)
        .unwrap_or(IANA_WHOIS)
}

/// Query line in the syntax `host` expects.
pub fn prepare_body(host: &str, query: &str) -> Vec<u8> {
    let query = query.trim();
    let host = host.to_lowercase();

    let line = if host.ends_with("verisign-grs.com") {
        // '=' restricts the match to domain records
        format!("={}\r\n", query)
    } else if host == "whois.denic.de" {
        format!("-T dn,ace {}\r\n", query)
    } else if host == ARIN_WHOIS {
        format!("n + {}\r\n", query)
    } else {
        format!("{}\r\n", query)
    };

    line.into_bytes()
}

/// Fills the request's host and body from its query where they are unset.
///
/// A request with a URL keeps going to that URL and only gets a body.
pub fn resolve(request: &mut Request) -> Result<()> {
    if request.query.trim().is_empty() {
        return Err(SleuthError::InvalidQuery(
            "query must not be empty".to_string(),
        ));
    }

    if request.host.is_empty() && !request.is_http() {
        request.host = whois_server_for(&request.query).to_string();
        debug!(query = %request.query, host = %request.host, "Resolved WHOIS server");
    }

    if request.body.is_empty() {
        request.body = prepare_body(&request.host, &request.query);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tld() {
        assert_eq!(get_tld("example.com"), Some("com"));
        assert_eq!(get_tld("example.co.uk."), Some("uk"));
        assert_eq!(get_tld(""), None);
    }

    #[test]
    fn test_whois_server_for_domains() {
        assert_eq!(whois_server_for("example.com"), "whois.verisign-grs.com");
        assert_eq!(whois_server_for("EXAMPLE.ORG"), "whois.pir.org");
        assert_eq!(whois_server_for("example.de"), "whois.denic.de");
        assert_eq!(whois_server_for("example.unknowntld"), IANA_WHOIS);
        assert_eq!(whois_server_for("com"), "whois.verisign-grs.com");
    }

    #[test]
    fn test_whois_server_for_addresses() {
        assert_eq!(whois_server_for("192.0.2.1"), ARIN_WHOIS);
        assert_eq!(whois_server_for("2001:db8::1"), ARIN_WHOIS);
    }

    #[test]
    fn test_prepare_body() {
        assert_eq!(prepare_body("whois.verisign-grs.com", "example.com"), b"=example.com\r\n");
        assert_eq!(prepare_body("whois.denic.de", "example.de"), b"-T dn,ace example.de\r\n");
        assert_eq!(prepare_body("whois.arin.net", "192.0.2.1"), b"n + 192.0.2.1\r\n");
        assert_eq!(prepare_body("whois.pir.org", " example.org "), b"example.org\r\n");
    }

    #[test]
    fn test_resolve_fills_host_and_body() {
        let mut request = Request::new("example.com");
        resolve(&mut request).unwrap();

        assert_eq!(request.host, "whois.verisign-grs.com");
        assert_eq!(request.body, b"=example.com\r\n");
    }

    #[test]
    fn test_resolve_keeps_explicit_host() {
        let mut request = Request::new("example.com").with_host("whois.example.net");
        resolve(&mut request).unwrap();

        assert_eq!(request.host, "whois.example.net");
        assert_eq!(request.body, b"example.com\r\n");
    }

    #[test]
    fn test_resolve_leaves_http_host_empty() {
        let mut request = Request::new("example.com").with_url("https://rdap.example/domain/example.com");
        resolve(&mut request).unwrap();

        assert!(request.host.is_empty());
        assert!(request.is_http());
    }

    #[test]
    fn test_resolve_rejects_blank_query() {
        let mut request = Request::new("  ");
        assert!(matches!(resolve(&mut request), Err(SleuthError::InvalidQuery(_))));
    }
}
