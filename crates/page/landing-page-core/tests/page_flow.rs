use landing_page::{
    staggered_order, LinkClick, MenuIcon, MobileNav, NavEffect, Throttle, LINK_STAGGER_S,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn open_navigate_and_dismiss() {
    let mut nav = MobileNav::new();

    nav.toggle();
    assert_eq!(nav.icon(), MenuIcon::Times);

    let effects = nav.click_link("#streamers", Some(1_400.0), 72.0);
    assert_eq!(
        effects,
        vec![
            NavEffect::ScrollTo { top: 1_328.0 },
            NavEffect::SetMenuOpen { open: false },
            NavEffect::SetIcon {
                icon: MenuIcon::Bars
            },
            NavEffect::SetActiveLink {
                href: "#streamers".into()
            },
        ]
    );

    nav.toggle();
    nav.click_link("#links", Some(300.0), 72.0);
    assert_eq!(nav.active_link(), Some("#links"));

    // Escape while closed still resets the icon.
    let effects = nav.key_down("Escape");
    assert_eq!(
        effects[1],
        NavEffect::SetIcon {
            icon: MenuIcon::Bars
        }
    );
}

#[test]
fn shuffled_links_keep_every_item_once() {
    let links = vec!["alpha", "bravo", "charlie", "delta", "echo"];
    let mut rng = StdRng::seed_from_u64(2024);
    let order = staggered_order(links.clone(), LINK_STAGGER_S, &mut rng);
    assert_eq!(order.len(), links.len());
    for name in &links {
        assert_eq!(order.iter().filter(|s| s.item == *name).count(), 1);
    }
    assert_eq!(order[0].delay_s, 0.0);
    assert!((order[4].delay_s - 0.4).abs() < 1e-12);
}

#[test]
fn throttled_scroll_handler() {
    let mut throttle = Throttle::new(16.0);
    let fired: Vec<f64> = (0..10)
        .map(|i| i as f64 * 5.0)
        .filter(|t| throttle.try_acquire(*t))
        .collect();
    assert_eq!(fired, vec![0.0, 20.0, 40.0]);
}

#[test]
fn link_click_feedback() {
    let fb = LinkClick::new("Discord", "https://discord.gg/x").record();
    assert!(fb.scale < 1.0);
    assert!(fb.release_after_ms > 0.0);
}
