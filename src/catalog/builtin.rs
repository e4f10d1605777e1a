use super::{AccentColor, CatalogEntry, Category};

struct CategoryDef {
    name: &'static str,
    icon: &'static str,
    color: AccentColor,
    /// `(name, description, invocation)`
    entries: &'static [(&'static str, &'static str, &'static str)],
}

const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "System",
        icon: "💻",
        color: AccentColor::rgb(0x3b, 0x82, 0xf6),
        entries: &[
            ("System Information", "View detailed system specs", "msinfo32"),
            ("Display Settings", "Screen resolution and scaling", "desk.cpl"),
            ("Power Options", "Manage power plans", "powercfg.cpl"),
            ("Advanced System", "System properties", "sysdm.cpl"),
            ("Device Manager", "Manage hardware devices", "devmgmt.msc"),
            ("Disk Cleanup", "Free up disk space", "cleanmgr"),
            ("Performance Monitor", "Monitor system performance", "perfmon"),
        ],
    },
    CategoryDef {
        name: "Network",
        icon: "🌐",
        color: AccentColor::rgb(0x10, 0xb9, 0x81),
        entries: &[
            ("Network Connections", "View all network adapters", "ncpa.cpl"),
            ("Network Status", "Check connection status", "ms-settings:network-status"),
            ("Wi-Fi Settings", "Manage wireless networks", "ms-settings:network-wifi"),
            ("Firewall", "Windows Firewall settings", "firewall.cpl"),
            ("Internet Options", "Browser and proxy settings", "inetcpl.cpl"),
        ],
    },
    CategoryDef {
        name: "Devices",
        icon: "🖨️",
        color: AccentColor::rgb(0x8b, 0x5c, 0xf6),
        entries: &[
            ("Bluetooth", "Manage Bluetooth devices", "ms-settings:bluetooth"),
            ("Printers", "Add and manage printers", "ms-settings:printers"),
            ("Mouse Settings", "Configure mouse", "main.cpl"),
            ("Sound Settings", "Audio devices and volume", "mmsys.cpl"),
        ],
    },
    CategoryDef {
        name: "Personalization",
        icon: "🎨",
        color: AccentColor::rgb(0xec, 0x48, 0x99),
        entries: &[
            ("Personalization", "Customize Windows", "ms-settings:personalization"),
            ("Background", "Change wallpaper", "ms-settings:personalization-background"),
            ("Colors", "Accent colors and themes", "ms-settings:colors"),
            ("Lock Screen", "Lock screen settings", "ms-settings:lockscreen"),
            ("Taskbar", "Taskbar preferences", "ms-settings:taskbar"),
        ],
    },
    CategoryDef {
        name: "Accounts",
        icon: "👤",
        color: AccentColor::rgb(0xf9, 0x73, 0x16),
        entries: &[
            ("User Accounts", "Manage user accounts", "netplwiz"),
            ("Sign-in Options", "Password, PIN, biometrics", "ms-settings:signinoptions"),
            ("Family & Users", "Add other users", "ms-settings:otherusers"),
        ],
    },
    CategoryDef {
        name: "Security",
        icon: "🛡️",
        color: AccentColor::rgb(0xef, 0x44, 0x44),
        entries: &[
            ("Windows Security", "Virus & threat protection", "windowsdefender:"),
            ("Windows Update", "Check for updates", "ms-settings:windowsupdate"),
            ("Privacy Settings", "App permissions", "ms-settings:privacy"),
            ("Backup", "Backup settings", "ms-settings:backup"),
        ],
    },
    CategoryDef {
        name: "Apps",
        icon: "📦",
        color: AccentColor::rgb(0x63, 0x66, 0xf1),
        entries: &[
            ("Apps & Features", "Install/uninstall apps", "ms-settings:appsfeatures"),
            ("Default Apps", "Set default programs", "ms-settings:defaultapps"),
            ("Startup Apps", "Manage startup programs", "ms-settings:startupapps"),
            ("Programs & Features", "Classic program list", "appwiz.cpl"),
        ],
    },
    CategoryDef {
        name: "Services",
        icon: "⚙️",
        color: AccentColor::rgb(0x14, 0xb8, 0xa6),
        entries: &[
            ("Services", "Windows services", "services.msc"),
            ("Task Scheduler", "Scheduled tasks", "taskschd.msc"),
            ("Event Viewer", "System logs", "eventvwr.msc"),
            ("Registry Editor", "Edit registry (Advanced)", "regedit"),
            ("Task Manager", "Process manager", "taskmgr"),
        ],
    },
    CategoryDef {
        name: "Storage",
        icon: "💾",
        color: AccentColor::rgb(0x0e, 0xa5, 0xe9),
        entries: &[
            ("Disk Cleanup", "Free up disk space", "cleanmgr"),
            ("Disk Management", "Partition and format drives", "diskmgmt.msc"),
            ("Storage Settings", "Manage disk space", "ms-settings:storagesense"),
            ("Recycle Bin", "View and manage deleted files", "shell:RecycleBinFolder"),
            ("Downloads", "View and manage downloaded files", "shell:Downloads"),
            ("App Data", "View and manage application data files", "shell:AppData"),
            ("Temp Files (User)", "Open user temporary files folder", "shell:Local AppData\\Temp"),
        ],
    },
];

pub(super) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|def| {
            Category::new(
                def.name,
                def.icon,
                def.color,
                def.entries
                    .iter()
                    .map(|(name, desc, cmd)| CatalogEntry::new(*name, *desc, *cmd))
                    .collect(),
            )
        })
        .collect()
}
