//! Route access policy evaluated by the authentication gate.
//!
//! Access rules live in one ordered table instead of being scattered across
//! route definitions. Each rule pairs an ant-style path pattern with the
//! access level it requires; the first matching rule wins, and paths no rule
//! matches fall back to requiring authentication.

use bl_core::domain::entities::member::Role;

/// Access level required for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// No authentication required
    Public,
    /// Any authenticated identity
    Authenticated,
    /// An authenticated identity holding at least one of the listed roles
    AnyRole(Vec<Role>),
}

/// Ant-style path pattern
///
/// `*` matches exactly one path segment, `**` matches any number of segments
/// including none. Literal segments match byte-for-byte.
#[derive(Debug, Clone)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `*`
    Single,
    /// `**`
    Many,
}

impl PathPattern {
    /// Parses a pattern such as `/admin/**` or `/**/update`
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| match part {
                "*" => Segment::Single,
                "**" => Segment::Many,
                literal => Segment::Literal(literal.to_string()),
            })
            .collect();

        Self { segments }
    }

    /// Checks whether the given request path matches this pattern
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        Self::matches_segments(&self.segments, &parts)
    }

    fn matches_segments(pattern: &[Segment], path: &[&str]) -> bool {
        match pattern.split_first() {
            None => path.is_empty(),
            Some((Segment::Many, rest)) => {
                // `**` may swallow zero or more leading segments
                (0..=path.len()).any(|taken| Self::matches_segments(rest, &path[taken..]))
            }
            Some((segment, rest)) => match path.split_first() {
                Some((head, tail)) => {
                    let head_matches = match segment {
                        Segment::Literal(literal) => literal == head,
                        Segment::Single => true,
                        Segment::Many => unreachable!(),
                    };
                    head_matches && Self::matches_segments(rest, tail)
                }
                None => false,
            },
        }
    }
}

/// Ordered route access table
///
/// `access_for` walks the rules top to bottom and returns the first match,
/// so narrower rules must be registered before broader ones. Anything no
/// rule covers requires authentication.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    rules: Vec<(PathPattern, Access)>,
    fallback: Access,
}

impl RoutePolicy {
    /// Creates an empty policy with an authenticated fallback
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: Access::Authenticated,
        }
    }

    /// Appends a rule; earlier rules take precedence
    pub fn rule(mut self, pattern: &str, access: Access) -> Self {
        self.rules.push((PathPattern::new(pattern), access));
        self
    }

    /// Replaces the fallback applied when no rule matches
    pub fn with_fallback(mut self, access: Access) -> Self {
        self.fallback = access;
        self
    }

    /// Resolves the access level for a request path
    pub fn access_for(&self, path: &str) -> &Access {
        for (pattern, access) in &self.rules {
            if pattern.matches(path) {
                return access;
            }
        }
        &self.fallback
    }
}

impl Default for RoutePolicy {
    /// The BiteLog route table
    ///
    /// `/admin/**` sits above the mutating-path patterns so an admin path
    /// can never fall through to the weaker USER/ADMIN rule.
    fn default() -> Self {
        let member_roles = vec![Role::User, Role::Admin];

        Self::new()
            .rule("/login", Access::Public)
            .rule("/join", Access::Public)
            .rule("/reissue", Access::Public)
            .rule("/health", Access::Public)
            .rule("/", Access::Public)
            .rule("/log-out", Access::Authenticated)
            .rule("/admin/**", Access::AnyRole(vec![Role::Admin]))
            .rule("/user/**", Access::AnyRole(member_roles.clone()))
            .rule("/**/add", Access::AnyRole(member_roles.clone()))
            .rule("/**/update", Access::AnyRole(member_roles.clone()))
            .rule("/**/delete", Access::AnyRole(member_roles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern() {
        let pattern = PathPattern::new("/login");
        assert!(pattern.matches("/login"));
        assert!(pattern.matches("/login/"));
        assert!(!pattern.matches("/login/extra"));
        assert!(!pattern.matches("/log-out"));
    }

    #[test]
    fn test_root_pattern_matches_only_root() {
        let pattern = PathPattern::new("/");
        assert!(pattern.matches("/"));
        assert!(!pattern.matches("/login"));
    }

    #[test]
    fn test_single_star_matches_exactly_one_segment() {
        let pattern = PathPattern::new("/user/*");
        assert!(pattern.matches("/user/alice_01"));
        assert!(!pattern.matches("/user"));
        assert!(!pattern.matches("/user/alice_01/meals"));
    }

    #[test]
    fn test_double_star_matches_any_depth() {
        let pattern = PathPattern::new("/admin/**");
        assert!(pattern.matches("/admin"));
        assert!(pattern.matches("/admin/members"));
        assert!(pattern.matches("/admin/members/alice_01"));
        assert!(!pattern.matches("/user/admin"));
    }

    #[test]
    fn test_double_star_prefix() {
        let pattern = PathPattern::new("/**/update");
        assert!(pattern.matches("/update"));
        assert!(pattern.matches("/meal/update"));
        assert!(pattern.matches("/meal/42/update"));
        assert!(!pattern.matches("/meal/42/update/now"));
    }

    #[test]
    fn test_default_policy_public_routes() {
        let policy = RoutePolicy::default();
        assert_eq!(*policy.access_for("/login"), Access::Public);
        assert_eq!(*policy.access_for("/join"), Access::Public);
        assert_eq!(*policy.access_for("/reissue"), Access::Public);
        assert_eq!(*policy.access_for("/health"), Access::Public);
        assert_eq!(*policy.access_for("/"), Access::Public);
    }

    #[test]
    fn test_default_policy_logout_requires_authentication() {
        let policy = RoutePolicy::default();
        assert_eq!(*policy.access_for("/log-out"), Access::Authenticated);
    }

    #[test]
    fn test_default_policy_admin_paths() {
        let policy = RoutePolicy::default();
        assert_eq!(
            *policy.access_for("/admin/members"),
            Access::AnyRole(vec![Role::Admin])
        );
        // The admin rule outranks the /**/add rule
        assert_eq!(
            *policy.access_for("/admin/add"),
            Access::AnyRole(vec![Role::Admin])
        );
    }

    #[test]
    fn test_default_policy_member_paths() {
        let policy = RoutePolicy::default();
        let member_roles = Access::AnyRole(vec![Role::User, Role::Admin]);

        assert_eq!(*policy.access_for("/user/alice_01"), member_roles);
        assert_eq!(*policy.access_for("/user/alice_01/meals"), member_roles);
        assert_eq!(*policy.access_for("/meal/add"), member_roles);
        assert_eq!(*policy.access_for("/meal/42/update"), member_roles);
        assert_eq!(*policy.access_for("/meal/42/delete"), member_roles);
    }

    #[test]
    fn test_default_policy_unknown_path_falls_back_to_authenticated() {
        let policy = RoutePolicy::default();
        assert_eq!(*policy.access_for("/unmapped"), Access::Authenticated);
        assert_eq!(*policy.access_for("/meal/42"), Access::Authenticated);
    }

    #[test]
    fn test_custom_fallback() {
        let policy = RoutePolicy::new().with_fallback(Access::Public);
        assert_eq!(*policy.access_for("/anything"), Access::Public);
    }
}
