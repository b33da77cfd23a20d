use std::fmt;
use std::str::FromStr;

/// Páginas de la SPA. Siempre hay exactamente una activa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Products,
    Cart,
    Orders,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Products, Page::Cart, Page::Orders];

    /// Valor del atributo `data-page` de los botones de navegación
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Products => "products",
            Page::Cart => "cart",
            Page::Orders => "orders",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Products
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == raw)
            .ok_or_else(|| format!("Página desconocida: {:?}", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_pages() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn rejects_unknown_and_case_variants() {
        assert!("checkout".parse::<Page>().is_err());
        assert!("Cart".parse::<Page>().is_err());
        assert!("".parse::<Page>().is_err());
    }
}
