//! The tables shipped with the server.

/// `(uri, name, description, file)` for every built-in resource.
pub(crate) const RESOURCES: &[(&str, &str, &str, &str)] = &[
    // Documentacion original (cross-platform)
    (
        "sajarubox://schema",
        "Database Schema",
        "Esquema de Firestore: colecciones, campos y tipos",
        "knowledge/schema.md",
    ),
    (
        "sajarubox://roles",
        "Roles & Permissions",
        "Roles de usuario (admin/member) y permisos por coleccion",
        "knowledge/roles.md",
    ),
    (
        "sajarubox://rules",
        "Business Rules (legacy)",
        "Reglas de negocio generales (archivo original)",
        "knowledge/business-rules.md",
    ),
    (
        "sajarubox://platforms",
        "Platform Features",
        "Features por plataforma (Android, iOS, Web)",
        "knowledge/platforms.md",
    ),
    (
        "sajarubox://sprint",
        "Current Sprint",
        "Sprint actual y backlog de features",
        "sprints/sprint-01.md",
    ),
    // Reglas de negocio (para PO)
    (
        "sajarubox://business/authentication",
        "Reglas: Autenticacion",
        "Flujos de login, registro, multi-proveedor, seguridad",
        "knowledge/business-rules/01-authentication.md",
    ),
    (
        "sajarubox://business/user-roles",
        "Reglas: Roles de usuario",
        "Roles, permisos por coleccion, funcionalidad por rol",
        "knowledge/business-rules/02-user-roles.md",
    ),
    (
        "sajarubox://business/memberships",
        "Reglas: Membresias",
        "Planes, estados, asignacion, soft delete",
        "knowledge/business-rules/03-membership-management.md",
    ),
    (
        "sajarubox://business/members",
        "Reglas: Registro de miembros",
        "Alta de miembros, busqueda, grupos familiares",
        "knowledge/business-rules/04-member-registration.md",
    ),
    (
        "sajarubox://business/admin-setup",
        "Reglas: Setup de admin",
        "Deteccion de primer usuario, resolucion de sesion",
        "knowledge/business-rules/05-admin-setup.md",
    ),
    (
        "sajarubox://business/membership-plans",
        "Reglas: Catalogo de planes",
        "Tipos de plan (time_based, visit_based, mixed), campos, reglas de negocio",
        "knowledge/business-rules/06-membership-plans.md",
    ),
    (
        "sajarubox://business/membership-assignments",
        "Reglas: Asignaciones de membresia",
        "Snapshot inmutable, check-in, renovacion, vencimiento, planes familiares",
        "knowledge/business-rules/07-membership-assignments.md",
    ),
    (
        "sajarubox://business/payments",
        "Reglas: Pagos y cobros",
        "Tipos de pago, cobro de membresia, pase de dia, venta de productos/servicios, punto de venta",
        "knowledge/business-rules/08-payments.md",
    ),
    // Arquitectura iOS (para IA)
    (
        "sajarubox://ios/project-structure",
        "iOS: Estructura del proyecto",
        "Dos repos, modulos SPM, flujo de dependencias",
        "knowledge/ios-architecture/01-project-structure.md",
    ),
    (
        "sajarubox://ios/mvvm-pattern",
        "iOS: Patron MVVM",
        "View + ViewData + ViewModel con ejemplos",
        "knowledge/ios-architecture/02-mvvm-pattern.md",
    ),
    (
        "sajarubox://ios/dependency-injection",
        "iOS: Inyeccion de dependencias",
        "swift-dependencies, DependencyState, RouterManager",
        "knowledge/ios-architecture/03-dependency-injection.md",
    ),
    (
        "sajarubox://ios/navigation",
        "iOS: Sistema de navegacion",
        "Phase global + Router/FlowStack por modulo",
        "knowledge/ios-architecture/04-navigation-system.md",
    ),
    (
        "sajarubox://ios/design-system",
        "iOS: Sistema de diseno SajaruUI",
        "Protocolos, themes, property wrappers, styles, Moon components",
        "knowledge/ios-architecture/05-design-system.md",
    ),
    (
        "sajarubox://ios/data-sync",
        "iOS: Sincronizacion de datos",
        "SyncEngine, RemoteStore/LocalStore (planificado)",
        "knowledge/ios-architecture/06-data-sync.md",
    ),
    // Reglas de negocio: Clases y Reportes
    (
        "sajarubox://business/classes",
        "Reglas: Clases del gimnasio",
        "CRUD de clases, recurrencia, reservas, asistencia, compatibilidad cross-platform",
        "knowledge/business-rules/10-classes.md",
    ),
    (
        "sajarubox://business/reports",
        "Reglas: Reportes y metricas",
        "Metricas financieras, visitas, membresias, inventario, periodos, alertas",
        "knowledge/business-rules/11-reports.md",
    ),
    // Implementacion iOS (para devs)
    (
        "sajarubox://ios-impl/firestore",
        "iOS Impl: Operaciones Firestore",
        "CRUD, soft delete, email index, busqueda, codigo completo",
        "knowledge/ios-implementation/01-firestore-operations.md",
    ),
    (
        "sajarubox://ios-impl/auth-flow",
        "iOS Impl: Flujo de autenticacion",
        "AuthProvider pattern, Firebase Auth, AuthErrorMapper",
        "knowledge/ios-implementation/02-auth-flow.md",
    ),
    (
        "sajarubox://ios-impl/session-resolver",
        "iOS Impl: Session Resolver",
        "Algoritmo completo de resolucion de sesion",
        "knowledge/ios-implementation/03-session-resolver.md",
    ),
    (
        "sajarubox://ios-impl/new-module",
        "iOS Impl: Crear nuevo modulo",
        "Guia paso a paso para crear modulos MVVM",
        "knowledge/ios-implementation/04-creating-new-module.md",
    ),
    (
        "sajarubox://ios-impl/theming",
        "iOS Impl: Guia de theming",
        "Property wrappers, styles, crear temas nuevos",
        "knowledge/ios-implementation/05-theming-guide.md",
    ),
    (
        "sajarubox://ios-impl/classes",
        "iOS Impl: Modulo de clases",
        "Implementacion del modulo de clases: modelos, Firestore, UI, recurrencia",
        "knowledge/ios-implementation/10-classes-module.md",
    ),
    (
        "sajarubox://ios-impl/reports",
        "iOS Impl: Modulo de reportes",
        "Dashboard de metricas, TextAmount, calculo desde repositorios existentes",
        "knowledge/ios-implementation/11-reports-module.md",
    ),
];

/// Single-file topics, in declaration order.
pub(crate) const FILE_TOPICS: &[(&str, &str)] = &[
    // Originales
    ("schema", "knowledge/schema.md"),
    ("roles", "knowledge/roles.md"),
    ("rules", "knowledge/business-rules.md"),
    ("platforms", "knowledge/platforms.md"),
    ("sprint", "sprints/sprint-01.md"),
    // Reglas de negocio
    ("authentication", "knowledge/business-rules/01-authentication.md"),
    ("user-roles", "knowledge/business-rules/02-user-roles.md"),
    ("memberships", "knowledge/business-rules/03-membership-management.md"),
    ("members", "knowledge/business-rules/04-member-registration.md"),
    ("admin-setup", "knowledge/business-rules/05-admin-setup.md"),
    ("membership-plans", "knowledge/business-rules/06-membership-plans.md"),
    ("membership-assignments", "knowledge/business-rules/07-membership-assignments.md"),
    ("payments", "knowledge/business-rules/08-payments.md"),
    ("inventory", "knowledge/business-rules/09-inventory.md"),
    ("classes", "knowledge/business-rules/10-classes.md"),
    ("reports", "knowledge/business-rules/11-reports.md"),
    // iOS arquitectura
    ("ios-structure", "knowledge/ios-architecture/01-project-structure.md"),
    ("ios-mvvm", "knowledge/ios-architecture/02-mvvm-pattern.md"),
    ("ios-di", "knowledge/ios-architecture/03-dependency-injection.md"),
    ("ios-navigation", "knowledge/ios-architecture/04-navigation-system.md"),
    ("ios-design-system", "knowledge/ios-architecture/05-design-system.md"),
    ("ios-sync", "knowledge/ios-architecture/06-data-sync.md"),
    // iOS implementacion
    ("ios-firestore", "knowledge/ios-implementation/01-firestore-operations.md"),
    ("ios-auth", "knowledge/ios-implementation/02-auth-flow.md"),
    ("ios-session", "knowledge/ios-implementation/03-session-resolver.md"),
    ("ios-new-module", "knowledge/ios-implementation/04-creating-new-module.md"),
    ("ios-theming", "knowledge/ios-implementation/05-theming-guide.md"),
    ("ios-inventory", "knowledge/ios-implementation/09-inventory-module.md"),
    ("ios-classes", "knowledge/ios-implementation/10-classes-module.md"),
    ("ios-reports", "knowledge/ios-implementation/11-reports-module.md"),
];

/// Bundles, declared after every single-file topic.
pub(crate) const BUNDLE_TOPICS: &[(&str, &[&str])] = &[
    (
        "all-business",
        &[
            "knowledge/business-rules/01-authentication.md",
            "knowledge/business-rules/02-user-roles.md",
            "knowledge/business-rules/03-membership-management.md",
            "knowledge/business-rules/04-member-registration.md",
            "knowledge/business-rules/05-admin-setup.md",
            "knowledge/business-rules/06-membership-plans.md",
            "knowledge/business-rules/07-membership-assignments.md",
            "knowledge/business-rules/08-payments.md",
            "knowledge/business-rules/09-inventory.md",
            "knowledge/business-rules/10-classes.md",
            "knowledge/business-rules/11-reports.md",
        ],
    ),
    (
        "all-ios-arch",
        &[
            "knowledge/ios-architecture/01-project-structure.md",
            "knowledge/ios-architecture/02-mvvm-pattern.md",
            "knowledge/ios-architecture/03-dependency-injection.md",
            "knowledge/ios-architecture/04-navigation-system.md",
            "knowledge/ios-architecture/05-design-system.md",
            "knowledge/ios-architecture/06-data-sync.md",
        ],
    ),
    (
        "all-ios-impl",
        &[
            "knowledge/ios-implementation/01-firestore-operations.md",
            "knowledge/ios-implementation/02-auth-flow.md",
            "knowledge/ios-implementation/03-session-resolver.md",
            "knowledge/ios-implementation/04-creating-new-module.md",
            "knowledge/ios-implementation/05-theming-guide.md",
            "knowledge/ios-implementation/09-inventory-module.md",
            "knowledge/ios-implementation/10-classes-module.md",
            "knowledge/ios-implementation/11-reports-module.md",
        ],
    ),
];
