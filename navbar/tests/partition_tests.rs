use navbar::{
    partition, AuthStatus, AuxItem, BreakpointSet, BreakpointSignals, Catalog, FixedWidth,
    MenuEntry, Navbar, NavbarView, OverflowEntry, User,
};

fn catalog_of(n: usize) -> Catalog {
    Catalog::new(
        (0..n)
            .map(|i| MenuEntry::link(format!("Item {}", i), format!("/item/{}", i)))
            .collect(),
    )
}

/// Every combination of the seven capacity flags and the three auxiliary
/// flags, including ones no real viewport can produce.
fn all_signal_vectors(tiers: usize) -> Vec<BreakpointSignals> {
    let bits = tiers + 3;
    (0..1u32 << bits)
        .map(|mask| {
            let flag = |i: usize| mask & (1 << i) != 0;
            BreakpointSignals {
                capacity: (0..tiers).map(flag).collect(),
                help: flag(tiers),
                notifications: flag(tiers + 1),
                profile: flag(tiers + 2),
                large_layout: true,
            }
        })
        .collect()
}

mod partition_properties {
    use super::*;

    #[test]
    fn inline_plus_overflow_candidates_is_catalog_size() {
        let set = BreakpointSet::default();
        let signals = all_signal_vectors(set.capacity.len());
        for n in 0..=12 {
            let catalog = catalog_of(n);
            for s in &signals {
                let p = partition(catalog.entries(), &set, s);
                assert_eq!(p.inline.len() + p.overflow_candidates().count(), n);
            }
        }
    }

    #[test]
    fn every_catalog_entry_appears_exactly_once_in_order() {
        let set = BreakpointSet::default();
        let catalog = Catalog::dojo();
        for s in all_signal_vectors(set.capacity.len()) {
            let p = partition(catalog.entries(), &set, &s);
            let seen: Vec<&str> = p
                .inline
                .iter()
                .copied()
                .chain(p.overflow_candidates())
                .map(|e| e.label.as_str())
                .collect();
            let expected: Vec<&str> = catalog.entries().iter().map(|e| e.label.as_str()).collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn auxiliary_entries_never_duplicate() {
        let set = BreakpointSet::default();
        let catalog = Catalog::dojo();
        for s in all_signal_vectors(set.capacity.len()) {
            let p = partition(catalog.entries(), &set, &s);

            let help_overflow = p.overflow.iter().filter(|e| **e == OverflowEntry::Help).count();
            let help_trailing = p.trailing.iter().filter(|a| **a == AuxItem::Help).count();
            assert_eq!(help_overflow + help_trailing, 1);

            let sign_out = p.overflow.iter().filter(|e| **e == OverflowEntry::SignOut).count();
            let profile = p.trailing.iter().filter(|a| **a == AuxItem::Profile).count();
            assert_eq!(sign_out + profile, 1);
        }
    }

    #[test]
    fn notifications_entry_follows_catalog_entries() {
        let set = BreakpointSet::default();
        let catalog = Catalog::dojo();
        for s in all_signal_vectors(set.capacity.len()) {
            let p = partition(catalog.entries(), &set, &s);
            let positions: Vec<usize> = p
                .overflow
                .iter()
                .enumerate()
                .filter(|(_, e)| **e == OverflowEntry::Notifications)
                .map(|(i, _)| i)
                .collect();

            if s.notifications {
                assert!(positions.is_empty());
            } else {
                assert_eq!(positions.len(), 1);
                let catalog_entries = p.overflow_candidates().count();
                assert_eq!(positions[0], catalog_entries);
            }
        }
    }

    #[test]
    fn partition_is_stateless() {
        let set = BreakpointSet::default();
        let catalog = Catalog::dojo();
        let narrow = BreakpointSignals::observe(&set, &FixedWidth(800));
        let wide = BreakpointSignals::observe(&set, &FixedWidth(1600));

        let first = partition(catalog.entries(), &set, &narrow);
        let _ = partition(catalog.entries(), &set, &wide);
        let again = partition(catalog.entries(), &set, &narrow);
        assert_eq!(first, again);
    }

    #[test]
    fn nine_entries_at_narrowest_tier_keep_two_inline() {
        let set = BreakpointSet::default();
        let catalog = catalog_of(9);
        let p = partition(
            catalog.entries(),
            &set,
            &BreakpointSignals::observe(&set, &FixedWidth(772)),
        );
        assert_eq!(p.hidden_count, 7);
        assert_eq!(p.inline.len(), 2);

        let p = partition(
            catalog.entries(),
            &set,
            &BreakpointSignals::observe(&set, &FixedWidth(700)),
        );
        assert_eq!(p.hidden_count, 8);
        assert_eq!(p.inline.len(), 1);
    }
}

mod viewport_widths {
    use super::*;

    fn member() -> AuthStatus {
        AuthStatus::Authenticated(User {
            username: "navbar".to_string(),
            display_name: "Navbar Test".to_string(),
            dojo_cohort: "1500-1600".to_string(),
        })
    }

    // (width, hidden catalog entries, help in overflow, sign out in overflow, notifications in overflow)
    const WIDTHS: &[(u32, usize, bool, bool, bool)] = &[
        (1560, 0, false, false, false),
        (1416, 2, false, false, false),
        (1315, 3, false, false, false),
        (1196, 4, false, false, false),
        (1066, 5, false, false, false),
        (963, 6, false, false, false),
        (772, 7, false, false, false),
        (634, 8, false, false, false),
        (600, 8, true, false, false),
        (555, 8, true, false, true),
        (541, 8, true, true, true),
    ];

    #[test]
    fn shows_correct_authenticated_items_per_width() {
        let navbar = Navbar::default();
        let auth = member();
        for &(width, hidden, help, sign_out, notifications) in WIDTHS {
            let view = navbar.view_for(&auth, &FixedWidth(width));
            let NavbarView::Full(p) = &view else {
                panic!("expected full layout at {}px", width);
            };
            assert_eq!(p.inline.len(), 10 - hidden, "width {}", width);
            assert_eq!(p.overflow_candidates().count(), hidden, "width {}", width);
            assert_eq!(p.overflow.contains(&OverflowEntry::Help), help, "width {}", width);
            assert_eq!(
                p.overflow.contains(&OverflowEntry::SignOut),
                sign_out,
                "width {}",
                width
            );
            assert_eq!(
                p.overflow.contains(&OverflowEntry::Notifications),
                notifications,
                "width {}",
                width
            );
        }
    }

    #[test]
    fn extra_small_layout_ignores_capacity_tiers() {
        let navbar = Navbar::default();
        let auth = member();
        let set = &navbar.breakpoints;
        for mut signals in all_signal_vectors(set.capacity.len()) {
            signals.large_layout = false;
            let view = navbar.view(&auth, &signals);
            let NavbarView::ExtraSmall(menu) = &view else {
                panic!("expected extra-small layout");
            };
            let catalog: Vec<&str> = menu
                .entries
                .iter()
                .filter_map(|e| match e {
                    OverflowEntry::Catalog(entry) => Some(entry.label.as_str()),
                    _ => None,
                })
                .collect();
            assert_eq!(catalog.len(), navbar.catalog.len());
            assert_eq!(
                &menu.entries[catalog.len()..],
                &[
                    OverflowEntry::Notifications,
                    OverflowEntry::Help,
                    OverflowEntry::SignOut
                ]
            );
            assert!(view.inline().is_empty());
        }
    }

    #[test]
    fn unauthenticated_visitors_see_guest_menu() {
        let navbar = Navbar::default();
        let large = navbar.view_for(&AuthStatus::Unauthenticated, &FixedWidth(1200));
        let labels: Vec<&str> = large.inline().iter().map(|e| e.label.as_str()).collect();
        assert!(labels.contains(&"Tournaments"));
        assert!(labels.contains(&"Signin"));
        assert!(labels.contains(&"Signup"));
        assert!(!labels.contains(&"Sign Out"));

        let small = navbar.view_for(&AuthStatus::Unauthenticated, &FixedWidth(449));
        let labels: Vec<String> = small.overflow().iter().map(|e| e.entry().label.clone()).collect();
        assert!(labels.iter().any(|l| l == "Signin"));
        assert!(!labels.iter().any(|l| l == "Profile"));
    }
}
