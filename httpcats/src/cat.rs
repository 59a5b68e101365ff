use std::fmt;

/// An HTTP cat: the status it stands for and the image served for it.
///
/// Built fresh by every accessor call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCat {
    /// Status code associated with this cat.
    pub code: u16,
    /// Display name of the status, e.g. `Not Found`.
    pub name: String,
    /// URL the image was fetched from.
    pub url: String,
    /// Raw image bytes as returned by the image service.
    pub image: Vec<u8>,
}

impl HttpCat {
    /// Consume the cat, keeping only the image bytes.
    #[must_use]
    pub fn into_image(self) -> Vec<u8> {
        self.image
    }
}

impl fmt::Display for HttpCat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&HttpCat> for u16 {
    fn from(cat: &HttpCat) -> Self {
        cat.code
    }
}

impl From<HttpCat> for u16 {
    fn from(cat: HttpCat) -> Self {
        cat.code
    }
}

impl From<HttpCat> for Vec<u8> {
    fn from(cat: HttpCat) -> Self {
        cat.image
    }
}

impl AsRef<[u8]> for HttpCat {
    fn as_ref(&self) -> &[u8] {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teapot() -> HttpCat {
        HttpCat {
            code: 418,
            name: "Im A Teapot".into(),
            url: "https://http.cat/418".into(),
            image: vec![0xff, 0xd8, 0xff],
        }
    }

    #[test]
    fn converts_to_its_code() {
        let cat = teapot();
        assert_eq!(u16::from(&cat), 418);
        assert_eq!(u16::from(cat), 418);
    }

    #[test]
    fn displays_its_name() {
        assert_eq!(teapot().to_string(), "Im A Teapot");
    }

    #[test]
    fn converts_to_its_image() {
        let cat = teapot();
        let bytes: &[u8] = cat.as_ref();
        assert_eq!(bytes, [0xffu8, 0xd8, 0xff].as_slice());
        assert_eq!(Vec::<u8>::from(cat.clone()), vec![0xff, 0xd8, 0xff]);
        assert_eq!(cat.into_image(), vec![0xff, 0xd8, 0xff]);
    }
}
