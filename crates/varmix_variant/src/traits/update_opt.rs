/// In-place update from an options record `O`.
///
/// Implemented on the target by `#[derive(UpdateFromOpt)]` on `O`, which names
/// its targets with `#[var(target = Type)]`. Each field of `O` updates the
/// field of the same name:
///
/// - a field of type `Option<..>` is a patch, applied only when `Some`;
/// - any other field always overwrites.
///
/// Values are converted with [`From`], so a `T` patch can update an
/// `Option<T>` field. A field of `O` naming no field of the target does not
/// compile.
///
/// # Examples
///
/// ```
/// use varmix_variant::UpdateFromOpt;
/// use varmix_variant::derive::UpdateFromOpt;
///
/// struct R {
///     n: String,
///     v: i32,
/// }
///
/// #[derive(UpdateFromOpt, Default)]
/// #[var(target = R)]
/// struct Opts {
///     n: Option<String>,
/// }
///
/// let mut r = R { n: "x".into(), v: 1 };
/// r.update_opt(Opts { n: None });
/// assert_eq!((r.n.as_str(), r.v), ("x", 1));
///
/// r.update_opt(Opts { n: Some("y".into()) });
/// assert_eq!(r.n, "y");
/// ```
///
/// ```compile_fail
/// use varmix_variant::derive::UpdateFromOpt;
///
/// struct R {
///     n: String,
/// }
///
/// #[derive(UpdateFromOpt)]
/// #[var(target = R)]
/// struct Opts {
///     m: Option<String>,
/// }
/// ```
pub trait UpdateFromOpt<O> {
    fn update_opt(&mut self, opts: O);
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::UpdateFromOpt;
    use crate::derive::UpdateFromOpt;

    #[derive(Debug, Default, PartialEq, Clone)]
    struct Server {
        host: String,
        port: u16,
        motd: Option<String>,
        peers: Vec<String>,
    }

    #[derive(Debug, Default, PartialEq, Clone)]
    struct Client {
        host: String,
        port: u16,
    }

    #[derive(UpdateFromOpt, Default)]
    #[var(target = Server, target = Client)]
    struct Endpoint {
        host: Option<String>,
        port: Option<u16>,
    }

    #[derive(UpdateFromOpt)]
    #[var(target = Server)]
    struct Reset {
        motd: Option<String>,
        peers: Vec<String>,
    }

    #[derive(UpdateFromOpt)]
    #[var(target = Server)]
    struct Motd {
        motd: String,
    }

    fn server() -> Server {
        Server {
            host: "localhost".into(),
            port: 80,
            motd: Some("hi".into()),
            peers: vec![String::from("a")],
        }
    }

    #[test]
    fn absent_options_change_nothing() {
        let mut s = server();
        s.update_opt(Endpoint::default());
        assert_eq!(s, server());
    }

    #[test]
    fn present_options_are_copied() {
        let mut s = server();
        s.update_opt(Endpoint {
            host: None,
            port: Some(8080),
        });
        assert_eq!(s.port, 8080);
        assert_eq!(s.host, "localhost");

        let mut c = Client::default();
        c.update_opt(Endpoint {
            host: Some("remote".into()),
            port: None,
        });
        assert_eq!(c.host, "remote");
        assert_eq!(c.port, 0);
    }

    #[test]
    fn plain_fields_overwrite() {
        let mut s = server();
        s.update_opt(Reset {
            motd: None,
            peers: Vec::new(),
        });
        assert_eq!(s.motd.as_deref(), Some("hi"));
        assert!(s.peers.is_empty());
    }

    #[test]
    fn payload_converts_into_optional() {
        let mut s = server();
        s.update_opt(Motd { motd: "bye".into() });
        assert_eq!(s.motd.as_deref(), Some("bye"));
    }
}
