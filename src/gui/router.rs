// src/gui/router.rs
use crate::config::options::PageKind;

use super::pages::{self, Page};

/// A page plus its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Sales,
    Channels,
    Brands,
    Brand(String),
    Watchlist,
    Purchases,
    PurchaseNew,
    PurchaseScore(i64),
    Drops,
    Collabs,
    Directors,
    News,
    Map,
    Compete,
    Compare(String),
    Admin,
}

impl Route {
    pub fn kind(&self) -> PageKind {
        match self {
            Route::Dashboard => PageKind::Dashboard,
            Route::Sales => PageKind::Sales,
            Route::Channels => PageKind::Channels,
            Route::Brands => PageKind::Brands,
            Route::Brand(_) => PageKind::BrandDetail,
            Route::Watchlist => PageKind::Watchlist,
            Route::Purchases => PageKind::Purchases,
            Route::PurchaseNew => PageKind::PurchaseNew,
            Route::PurchaseScore(_) => PageKind::PurchaseScore,
            Route::Drops => PageKind::Drops,
            Route::Collabs => PageKind::Collabs,
            Route::Directors => PageKind::Directors,
            Route::News => PageKind::News,
            Route::Map => PageKind::Map,
            Route::Compete => PageKind::Compete,
            Route::Compare(_) => PageKind::Compare,
            Route::Admin => PageKind::Admin,
        }
    }

    /// Route for a sidebar entry; detail pages need parameters and have none.
    pub fn for_nav(kind: PageKind) -> Option<Route> {
        Some(match kind {
            PageKind::Dashboard => Route::Dashboard,
            PageKind::Sales => Route::Sales,
            PageKind::Channels => Route::Channels,
            PageKind::Brands => Route::Brands,
            PageKind::Watchlist => Route::Watchlist,
            PageKind::Purchases => Route::Purchases,
            PageKind::PurchaseNew => Route::PurchaseNew,
            PageKind::Drops => Route::Drops,
            PageKind::Collabs => Route::Collabs,
            PageKind::Directors => Route::Directors,
            PageKind::News => Route::News,
            PageKind::Map => Route::Map,
            PageKind::Compete => Route::Compete,
            PageKind::Admin => Route::Admin,
            PageKind::BrandDetail | PageKind::PurchaseScore | PageKind::Compare => return None,
        })
    }
}

pub fn page_for(route: &Route) -> Box<dyn Page> {
    match route {
        Route::Dashboard => Box::new(pages::dashboard::DashboardPage::default()),
        Route::Sales => Box::new(pages::sales::SalesPage::default()),
        Route::Channels => Box::new(pages::channels::ChannelsPage::default()),
        Route::Brands => Box::new(pages::brands::BrandsPage::default()),
        Route::Brand(slug) => Box::new(pages::brand_detail::BrandDetailPage::new(slug)),
        Route::Watchlist => Box::new(pages::watchlist::WatchlistPage::default()),
        Route::Purchases => Box::new(pages::purchases::PurchasesPage::default()),
        Route::PurchaseNew => Box::new(pages::purchase_new::PurchaseNewPage::default()),
        Route::PurchaseScore(id) => Box::new(pages::purchase_score::PurchaseScorePage::new(*id)),
        Route::Drops => Box::new(pages::drops::DropsPage::default()),
        Route::Collabs => Box::new(pages::collabs::CollabsPage::default()),
        Route::Directors => Box::new(pages::directors::DirectorsPage::default()),
        Route::News => Box::new(pages::news::NewsPage::default()),
        Route::Map => Box::new(pages::map::MapPage::default()),
        Route::Compete => Box::new(pages::compete::CompetePage::default()),
        Route::Compare(key) => Box::new(pages::compare::ComparePage::new(key)),
        Route::Admin => Box::new(pages::admin::AdminPage::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_entry_has_a_route_of_the_same_kind() {
        for kind in PageKind::NAV {
            let route = Route::for_nav(kind).unwrap();
            assert_eq!(route.kind(), kind);
        }
    }

    #[test]
    fn detail_routes_highlight_their_parent() {
        assert_eq!(Route::Brand(s!("nike")).kind().nav_parent(), PageKind::Brands);
        assert_eq!(Route::Compare(s!("k")).kind().nav_parent(), PageKind::Sales);
        assert_eq!(Route::PurchaseScore(1).kind().nav_parent(), PageKind::Purchases);
    }
}
