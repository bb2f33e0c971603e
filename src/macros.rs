/// Builds a [`Document`](crate::Document) from section/key/value literals.
///
/// Every section goes through [`Document::add_section`](crate::Document::add_section)
/// and every entry through [`Document::add_value`](crate::Document::add_value), so
/// names are validated and normalized the same way. A section with no keys is still
/// created. The macro evaluates to `Result<Document>` and stops at the first invalid
/// name.
///
/// # Examples
///
/// ```rust
/// use ini_doc::ini;
///
/// let doc = ini! {
///     "Server" => {
///         "host" => "localhost",
///         "port" => 8080,
///     },
///     "Features" => {
///         "beta" => true,
///     },
/// }
/// .unwrap();
///
/// assert_eq!(doc.get_int_value("server", "port"), 8080);
/// assert_eq!(doc.to_string(), "[SERVER]\nhost=\"localhost\"\nport=8080\n[FEATURES]\nbeta=yes");
/// ```
#[macro_export]
macro_rules! ini {
    () => {
        $crate::Result::<$crate::Document>::Ok($crate::Document::new())
    };

    ($($section:literal => { $($key:literal => $value:expr),* $(,)? }),+ $(,)?) => {{
        let build = || -> $crate::Result<$crate::Document> {
            #[allow(unused_mut)]
            let mut doc = $crate::Document::new();
            $(
                doc.add_section($section)?;
                $(
                    doc.add_value($section, $key, $value)?;
                )*
            )+
            Ok(doc)
        };
        build()
    }};
}
