//! Unit tests for kspt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, RippleId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
        assert_eq!(NodeId::from(42u32), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(RippleId(100) > RippleId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(RippleId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }

    #[test]
    fn oversized_index_rejected() {
        assert!(NodeId::try_from(u32::MAX as usize + 1).is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
        assert_eq!(Tick::default(), Tick::ZERO);
    }
}

#[cfg(test)]
mod config {
    use crate::{CancelToken, SolverConfig};

    #[test]
    fn defaults() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.k, 1);
        assert_eq!(cfg.max_ticks, None);
        assert!(cfg.deduplicate);
    }

    #[test]
    fn with_k_keeps_other_defaults() {
        let cfg = SolverConfig::with_k(8);
        assert_eq!(cfg.k, 8);
        assert!(cfg.deduplicate);
    }

    #[test]
    fn cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }
}
