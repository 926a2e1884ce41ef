use std::io::{self, Write};

use shelfscope_aggregate::BundleRenderer;
use shelfscope_core::{Condition, EnrichedPeerItem, ProductBundle};

use super::{HealthDisplay, NOT_AVAILABLE};

/// Side-panel style report: one titled section per card.
pub(crate) struct TextRenderer<W> {
    out: W,
    health: HealthDisplay,
}

impl<W: Write> TextRenderer<W> {
    pub(crate) fn new(out: W, health: HealthDisplay) -> Self {
        Self { out, health }
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "[{title}]")
    }

    fn row(&mut self, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.out, "  {:<15}{value}", format!("{label}:"))
    }

    fn item(&mut self, bundle: &ProductBundle) -> io::Result<()> {
        let item = &bundle.item;
        self.section("Item")?;
        self.row("ID", &item.id)?;
        self.row("Title", &item.title)?;
        self.row(
            "Price",
            format_price(item.price, item.currency_id.as_deref()),
        )?;
        self.row("Condition", condition_label(item.condition))?;
        self.row("Sold", item.sold_quantity_or_zero())?;
        self.row("Free shipping", yes_no(item.shipping.free_shipping))?;
        self.row("Link", item.permalink.as_deref().unwrap_or(NOT_AVAILABLE))?;
        self.row(
            "Thumbnail",
            item.display_thumbnail().unwrap_or(NOT_AVAILABLE),
        )?;
        writeln!(self.out, "  {}", self.health.format(item.health))
    }

    fn description(&mut self, bundle: &ProductBundle) -> io::Result<()> {
        self.section("Description")?;
        for line in bundle.description.text().lines() {
            writeln!(self.out, "  {line}")?;
        }
        Ok(())
    }

    fn category(&mut self, bundle: &ProductBundle) -> io::Result<()> {
        self.section("Category")?;
        match &bundle.category {
            Some(category) => {
                self.row("ID", &category.id)?;
                self.row("Name", &category.name)?;
                self.row("Path", category.breadcrumb())?;
            }
            None => writeln!(self.out, "  Category unavailable")?,
        }

        if !bundle.peers.is_empty() {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "  Top {} best sellers in this category:",
                bundle.peers.len()
            )?;
            // Peers come from the item's own site, so they share its currency.
            let currency_id = bundle.item.currency_id.as_deref();
            for peer in &bundle.peers {
                self.peer(peer, currency_id)?;
            }
        }
        Ok(())
    }

    fn peer(&mut self, peer: &EnrichedPeerItem, currency_id: Option<&str>) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "  #{} - {} ({})",
            peer.rank,
            peer.title,
            peer.permalink.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        let published = peer.date_created.map_or_else(
            || NOT_AVAILABLE.to_owned(),
            |d| d.format("%d/%m/%Y").to_string(),
        );
        let velocity = peer
            .sales_velocity
            .map_or_else(|| NOT_AVAILABLE.to_owned(), |v| format!("{v:.2}"));
        writeln!(self.out, "      Price:         {}", format_price(peer.price, currency_id))?;
        writeln!(self.out, "      Sold:          {}", peer.sold_quantity)?;
        writeln!(self.out, "      Free shipping: {}", yes_no(peer.free_shipping))?;
        writeln!(self.out, "      Published:     {published}")?;
        writeln!(self.out, "      Avg sold/day:  {velocity}")?;
        writeln!(self.out, "      Temperature:   {}", peer.temperature)?;
        writeln!(self.out, "      {}", self.health.format(peer.health))
    }

    fn currency(&mut self, bundle: &ProductBundle) -> io::Result<()> {
        self.section("Currency")?;
        let Some(currency) = &bundle.currency else {
            return writeln!(self.out, "  Currency unavailable");
        };
        self.row("ID", &currency.id)?;
        self.row(
            "Name",
            currency.description.as_deref().unwrap_or(NOT_AVAILABLE),
        )?;
        self.row("Symbol", currency.symbol.as_deref().unwrap_or(NOT_AVAILABLE))
    }

    fn seller(&mut self, bundle: &ProductBundle) -> io::Result<()> {
        self.section("Seller")?;
        let Some(seller) = &bundle.seller else {
            return writeln!(self.out, "  Seller information unavailable");
        };
        self.row("Seller ID", seller.id)?;
        self.row(
            "Nickname",
            seller.nickname.as_deref().unwrap_or(NOT_AVAILABLE),
        )?;
        if let Some(link) = &seller.permalink {
            self.row("Link", link)?;
        }
        Ok(())
    }

    fn site(&mut self, bundle: &ProductBundle) -> io::Result<()> {
        self.section("Site")?;
        let Some(site) = &bundle.site else {
            return writeln!(self.out, "  Site information unavailable");
        };
        self.row("Site ID", &site.id)?;
        self.row("Name", &site.name)?;
        self.row(
            "Currency",
            site.default_currency_id.as_deref().unwrap_or(NOT_AVAILABLE),
        )
    }
}

impl<W: Write> BundleRenderer for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, bundle: &ProductBundle) -> Result<(), Self::Error> {
        writeln!(self.out, "=== Product information: {} ===", bundle.product_id)?;
        self.item(bundle)?;
        self.description(bundle)?;
        self.category(bundle)?;
        self.currency(bundle)?;
        self.seller(bundle)?;
        self.site(bundle)?;
        self.out.flush()
    }
}

fn format_price(price: Option<f64>, currency_id: Option<&str>) -> String {
    match (price, currency_id) {
        (Some(p), Some(c)) => format!("{p:.2} {c}"),
        (Some(p), None) => format!("{p:.2}"),
        (None, _) => NOT_AVAILABLE.to_owned(),
    }
}

fn condition_label(condition: Option<Condition>) -> &'static str {
    match condition {
        Some(Condition::New) => "New",
        Some(Condition::Used) => "Used",
        Some(Condition::Other) => "Other",
        None => NOT_AVAILABLE,
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
