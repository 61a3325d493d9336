//! Closed message-kind tables.
//!
//! Every dispatch key the decoder understands is listed here. A numeric kind
//! outside these tables cannot be skipped safely, so lookups return `None`
//! and callers surface the matching `Unknown*Kind` error.

use std::fmt;

/// Bits OR'd into an outer frame kind when its payload is snappy-compressed.
pub const DEM_IS_COMPRESSED: u64 = 0x70;

macro_rules! kind_table {
    ($(#[$meta:meta])* $name:ident: $repr:ty { $($variant:ident = $id:literal => $label:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn from_id(id: $repr) -> Option<Self> {
                match id {
                    $($id => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn id(self) -> $repr {
                match self {
                    $($name::$variant => $id,)+
                }
            }

            /// Wire schema name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

kind_table! {
    /// Outer stream commands.
    DemoKind: u64 {
        Stop = 0 => "CDemoStop",
        FileHeader = 1 => "CDemoFileHeader",
        FileInfo = 2 => "CDemoFileInfo",
        SyncTick = 3 => "CDemoSyncTick",
        SendTables = 4 => "CDemoSendTables",
        ClassInfo = 5 => "CDemoClassInfo",
        StringTables = 6 => "CDemoStringTables",
        Packet = 7 => "CDemoPacket",
        SignonPacket = 8 => "CDemoSignonPacket",
        ConsoleCmd = 9 => "CDemoConsoleCmd",
        CustomData = 10 => "CDemoCustomData",
        CustomDataCallbacks = 11 => "CDemoCustomDataCallbacks",
        UserCmd = 12 => "CDemoUserCmd",
        FullPacket = 13 => "CDemoFullPacket",
    }
}

impl DemoKind {
    /// Kinds whose payload embeds an inner packet stream.
    pub fn carries_packet(self) -> bool {
        matches!(
            self,
            DemoKind::Packet | DemoKind::SignonPacket | DemoKind::FullPacket
        )
    }
}

/// Split a raw outer kind into (kind id, compressed).
pub fn split_compressed(raw: u64) -> (u64, bool) {
    (raw & !DEM_IS_COMPRESSED, raw & DEM_IS_COMPRESSED != 0)
}

kind_table! {
    /// Inner packet records (net and svc messages).
    NetKind: u64 {
        Nop = 0 => "CNETMsg_NOP",
        Disconnect = 1 => "CNETMsg_Disconnect",
        File = 2 => "CNETMsg_File",
        SplitScreenUser = 3 => "CNETMsg_SplitScreenUser",
        Tick = 4 => "CNETMsg_Tick",
        StringCmd = 5 => "CNETMsg_StringCmd",
        SetConVar = 6 => "CNETMsg_SetConVar",
        SignonState = 7 => "CNETMsg_SignonState",
        ServerInfo = 8 => "CSVCMsg_ServerInfo",
        SendTable = 9 => "CSVCMsg_SendTable",
        ClassInfo = 10 => "CSVCMsg_ClassInfo",
        SetPause = 11 => "CSVCMsg_SetPause",
        CreateStringTable = 12 => "CSVCMsg_CreateStringTable",
        UpdateStringTable = 13 => "CSVCMsg_UpdateStringTable",
        VoiceInit = 14 => "CSVCMsg_VoiceInit",
        VoiceData = 15 => "CSVCMsg_VoiceData",
        Print = 16 => "CSVCMsg_Print",
        Sounds = 17 => "CSVCMsg_Sounds",
        SetView = 18 => "CSVCMsg_SetView",
        FixAngle = 19 => "CSVCMsg_FixAngle",
        CrosshairAngle = 20 => "CSVCMsg_CrosshairAngle",
        BspDecal = 21 => "CSVCMsg_BSPDecal",
        SplitScreen = 22 => "CSVCMsg_SplitScreen",
        UserMessage = 23 => "CSVCMsg_UserMessage",
        EntityMessage = 24 => "CSVCMsg_EntityMessage",
        GameEvent = 25 => "CSVCMsg_GameEvent",
        PacketEntities = 26 => "CSVCMsg_PacketEntities",
        TempEntities = 27 => "CSVCMsg_TempEntities",
        Prefetch = 28 => "CSVCMsg_Prefetch",
        Menu = 29 => "CSVCMsg_Menu",
        GameEventList = 30 => "CSVCMsg_GameEventList",
        GetCvarValue = 31 => "CSVCMsg_GetCvarValue",
    }
}

kind_table! {
    /// User message discriminators (base range, then game range from 64).
    UserKind: i32 {
        AchievementEvent = 1 => "CUserMsg_AchievementEvent",
        CloseCaption = 2 => "CUserMsg_CloseCaption",
        CloseCaptionDirect = 3 => "CUserMsg_CloseCaptionDirect",
        CurrentTimescale = 4 => "CUserMsg_CurrentTimescale",
        DesiredTimescale = 5 => "CUserMsg_DesiredTimescale",
        Fade = 6 => "CUserMsg_Fade",
        GameTitle = 7 => "CUserMsg_GameTitle",
        Geiger = 8 => "CUserMsg_Geiger",
        HintText = 9 => "CUserMsg_HintText",
        HudMsg = 10 => "CUserMsg_HudMsg",
        HudText = 11 => "CUserMsg_HudText",
        KeyHintText = 12 => "CUserMsg_KeyHintText",
        MessageText = 13 => "CUserMsg_MessageText",
        RequestState = 14 => "CUserMsg_RequestState",
        ResetHud = 15 => "CUserMsg_ResetHUD",
        Rumble = 16 => "CUserMsg_Rumble",
        SayText = 17 => "CUserMsg_SayText",
        SayText2 = 18 => "CUserMsg_SayText2",
        SayTextChannel = 19 => "CUserMsg_SayTextChannel",
        Shake = 20 => "CUserMsg_Shake",
        ShakeDir = 21 => "CUserMsg_ShakeDir",
        StatsCrawlMsg = 22 => "CUserMsg_StatsCrawlMsg",
        StatsSkipState = 23 => "CUserMsg_StatsSkipState",
        TextMsg = 24 => "CUserMsg_TextMsg",
        Tilt = 25 => "CUserMsg_Tilt",
        Train = 26 => "CUserMsg_Train",
        VguiMenu = 27 => "CUserMsg_VGUIMenu",
        VoiceMask = 28 => "CUserMsg_VoiceMask",
        VoiceSubtitle = 29 => "CUserMsg_VoiceSubtitle",
        SendAudio = 30 => "CUserMsg_SendAudio",
        CameraTransition = 31 => "CUserMsg_CameraTransition",
        AddUnitToSelection = 64 => "CDOTAUserMsg_AddUnitToSelection",
        AiDebugLine = 65 => "CDOTAUserMsg_AIDebugLine",
        ChatEvent = 66 => "CDOTAUserMsg_ChatEvent",
        CombatHeroPositions = 67 => "CDOTAUserMsg_CombatHeroPositions",
        CombatLogData = 68 => "CDOTAUserMsg_CombatLogData",
        CombatLogShowDeath = 70 => "CDOTAUserMsg_CombatLogShowDeath",
        CreateLinearProjectile = 71 => "CDOTAUserMsg_CreateLinearProjectile",
        DestroyLinearProjectile = 72 => "CDOTAUserMsg_DestroyLinearProjectile",
        DodgeTrackingProjectiles = 73 => "CDOTAUserMsg_DodgeTrackingProjectiles",
        GlobalLightColor = 74 => "CDOTAUserMsg_GlobalLightColor",
        GlobalLightDirection = 75 => "CDOTAUserMsg_GlobalLightDirection",
        InvalidCommand = 76 => "CDOTAUserMsg_InvalidCommand",
        LocationPing = 77 => "CDOTAUserMsg_LocationPing",
        MapLine = 78 => "CDOTAUserMsg_MapLine",
        MiniKillCamInfo = 79 => "CDOTAUserMsg_MiniKillCamInfo",
        MinimapDebugPoint = 80 => "CDOTAUserMsg_MinimapDebugPoint",
        MinimapEvent = 81 => "CDOTAUserMsg_MinimapEvent",
        NevermoreRequiem = 82 => "CDOTAUserMsg_NevermoreRequiem",
        OverheadEvent = 83 => "CDOTAUserMsg_OverheadEvent",
        SetNextAutobuyItem = 84 => "CDOTAUserMsg_SetNextAutobuyItem",
        SharedCooldown = 85 => "CDOTAUserMsg_SharedCooldown",
        SpectatorPlayerClick = 86 => "CDOTAUserMsg_SpectatorPlayerClick",
        TutorialTipInfo = 87 => "CDOTAUserMsg_TutorialTipInfo",
        UnitEvent = 88 => "CDOTAUserMsg_UnitEvent",
        ParticleManager = 89 => "CDOTAUserMsg_ParticleManager",
        BotChat = 90 => "CDOTAUserMsg_BotChat",
        HudError = 91 => "CDOTAUserMsg_HudError",
        ItemPurchased = 92 => "CDOTAUserMsg_ItemPurchased",
        Ping = 93 => "CDOTAUserMsg_Ping",
        ItemFound = 94 => "CDOTAUserMsg_ItemFound",
        CharacterSpeakConcept = 95 => "CDOTAUserMsg_CharacterSpeakConcept",
        SwapVerify = 96 => "CDOTAUserMsg_SwapVerify",
        WorldLine = 97 => "CDOTAUserMsg_WorldLine",
        TournamentDrop = 98 => "CDOTAUserMsg_TournamentDrop",
        ItemAlert = 99 => "CDOTAUserMsg_ItemAlert",
        HalloweenDrops = 100 => "CDOTAUserMsg_HalloweenDrops",
        ChatWheel = 101 => "CDOTAUserMsg_ChatWheel",
        ReceivedXmasGift = 102 => "CDOTAUserMsg_ReceivedXmasGift",
        UpdateSharedContent = 103 => "CDOTAUserMsg_UpdateSharedContent",
        TutorialRequestExp = 104 => "CDOTAUserMsg_TutorialRequestExp",
        TutorialPingMinimap = 105 => "CDOTAUserMsg_TutorialPingMinimap",
        GamerulesStateChanged = 106 => "CDOTAUserMsg_GamerulesStateChanged",
        ShowSurvey = 107 => "CDOTAUserMsg_ShowSurvey",
        TutorialFade = 108 => "CDOTAUserMsg_TutorialFade",
        AddQuestLogEntry = 109 => "CDOTAUserMsg_AddQuestLogEntry",
        SendStatPopup = 110 => "CDOTAUserMsg_SendStatPopup",
        TutorialFinish = 111 => "CDOTAUserMsg_TutorialFinish",
        SendRoshanPopup = 112 => "CDOTAUserMsg_SendRoshanPopup",
        SendGenericToolTip = 113 => "CDOTAUserMsg_SendGenericToolTip",
        SendFinalGold = 114 => "CDOTAUserMsg_SendFinalGold",
    }
}
